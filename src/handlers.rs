use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse};
use axum::Json;
use log::{debug, info};
use uuid::Uuid;

use crate::captcha::CaptchaVerifier;
use crate::config::Settings;
use crate::error::{AppError, SubmitError};
use crate::landing;
use crate::relay::{RelayClient, RelayOutcome};
use crate::types::{ApiResponse, HealthResponse, Submission};
use crate::validation::{self, Validated};

pub const CAPTCHA_HEADER: &str = "g-recaptcha-response";
const RELAY_FAILED: &str = "Failed! Please try again later";

pub struct AppState {
    pub settings: Settings,
    pub captcha: CaptchaVerifier,
    pub relay: RelayClient,
}

impl AppState {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let captcha = CaptchaVerifier::new(
            http.clone(),
            settings.verify_url.clone(),
            settings.captcha_secret.clone(),
            settings.mode,
        );
        let relay = RelayClient::new(
            http,
            settings.relay_url.clone(),
            settings.relay_access_key.clone(),
        );
        Ok(Self {
            settings,
            captcha,
            relay,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Form {
    Contact,
    Subscribe,
}

impl Form {
    fn subject(self, host: &str) -> String {
        match self {
            Self::Contact => format!("Domain contact form submitted for {}", host),
            Self::Subscribe => format!("Domain subscription submitted for {}", host),
        }
    }

    fn accepted(self) -> &'static str {
        match self {
            Self::Contact => "Sent!",
            Self::Subscribe => "Subscribed!",
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn read_submission(payload: Result<Json<Submission>, JsonRejection>) -> Submission {
    match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            debug!("Unreadable submission body: {}", rejection);
            Submission::default()
        }
    }
}

async fn forward(
    state: &AppState,
    form: Form,
    host: &str,
    valid: Validated<'_>,
) -> Result<Json<ApiResponse>, SubmitError> {
    let id = Uuid::new_v4();
    info!("{:?} submission {} from {} for {}", form, id, valid.email, host);

    if !state.captcha.verify(valid.token).await {
        return Err(SubmitError::NotVerified);
    }

    let payload = state
        .relay
        .payload(form.subject(host), valid.email, valid.name, valid.message);

    let response = match state.relay.submit(&payload).await? {
        RelayOutcome::Delivered => ApiResponse::success(form.accepted()),
        RelayOutcome::Rejected(status) => {
            info!("Submission {} not relayed ({})", id, status);
            ApiResponse::failure(RELAY_FAILED)
        }
    };
    Ok(Json(response))
}

pub async fn contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<impl IntoResponse, SubmitError> {
    let submission = read_submission(payload);
    let valid = validation::validate_contact(header_str(&headers, CAPTCHA_HEADER), &submission)?;
    let host = header_str(&headers, header::HOST.as_str()).unwrap_or_default();

    forward(&state, Form::Contact, host, valid).await
}

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<impl IntoResponse, SubmitError> {
    let submission = read_submission(payload);
    let valid =
        validation::validate_subscription(header_str(&headers, CAPTCHA_HEADER), &submission)?;
    let host = header_str(&headers, header::HOST.as_str()).unwrap_or_default();

    forward(&state, Form::Subscribe, host, valid).await
}

pub async fn method_not_allowed() -> SubmitError {
    SubmitError::MethodNotAllowed
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let host = header_str(&headers, header::HOST.as_str()).unwrap_or_default();
    let page = landing::render(host, &state.settings.captcha_site_key)?;
    Ok(Html(page))
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
