use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use thiserror::Error;

use crate::types::ApiResponse;

/// Terminal outcome of a form submission that did not reach the relay, or
/// that failed unexpectedly on the way there.
///
/// The `Display` text is what the client shows in its toast.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Only POST method requests are allowed")]
    MethodNotAllowed,

    #[error("Please verify you are not a bot")]
    NotVerified,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your message")]
    MissingMessage,

    #[error("Unknown Error! Please try again later")]
    Unexpected(#[source] anyhow::Error),
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        if let Self::Unexpected(err) = &self {
            error!("Submission failed unexpectedly: {:#}", err);
        }

        (self.status(), Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(err.into())
    }
}

/// Failure outside the form flow, such as rendering the landing page.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
