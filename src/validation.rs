use std::sync::LazyLock;

use regex::Regex;

use crate::error::SubmitError;
use crate::types::Submission;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

// Dot-atom local part, then a host name of two or more LDH labels.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("email pattern is valid")
});

pub fn is_email(candidate: &str) -> bool {
    if candidate.len() > MAX_EMAIL_LEN {
        return false;
    }
    match candidate.split_once('@') {
        Some((local, _)) if local.len() > MAX_LOCAL_PART_LEN => false,
        Some(_) => EMAIL.is_match(candidate),
        None => false,
    }
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// A submission that passed field validation. Borrowed from the request body.
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a> {
    pub token: &'a str,
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub message: Option<&'a str>,
}

fn check_token_and_email<'a>(
    token: Option<&'a str>,
    submission: &'a Submission,
) -> Result<(&'a str, &'a str), SubmitError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or(SubmitError::NotVerified)?;

    let email = submission
        .email
        .as_deref()
        .filter(|e| is_email(e))
        .ok_or(SubmitError::InvalidEmail)?;

    Ok((token, email))
}

/// Checks a contact submission in order: captcha token, email, name, message.
pub fn validate_contact<'a>(
    token: Option<&'a str>,
    submission: &'a Submission,
) -> Result<Validated<'a>, SubmitError> {
    let (token, email) = check_token_and_email(token, submission)?;

    let name = submission.name.as_deref();
    if !present(name) {
        return Err(SubmitError::MissingName);
    }

    let message = submission.message.as_deref();
    if !present(message) {
        return Err(SubmitError::MissingMessage);
    }

    Ok(Validated {
        token,
        email,
        name,
        message,
    })
}

/// Subscriptions only carry an email address.
pub fn validate_subscription<'a>(
    token: Option<&'a str>,
    submission: &'a Submission,
) -> Result<Validated<'a>, SubmitError> {
    let (token, email) = check_token_and_email(token, submission)?;

    Ok(Validated {
        token,
        email,
        name: None,
        message: None,
    })
}
