use log::{info, warn};
use reqwest::{header, StatusCode};

use crate::types::RelayPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Rejected(StatusCode),
}

/// Forwards accepted submissions to the Web3Forms relay.
pub struct RelayClient {
    http: reqwest::Client,
    submit_url: String,
    access_key: String,
}

impl RelayClient {
    pub fn new(http: reqwest::Client, submit_url: String, access_key: String) -> Self {
        Self {
            http,
            submit_url,
            access_key,
        }
    }

    pub fn payload(
        &self,
        subject: String,
        email: &str,
        name: Option<&str>,
        message: Option<&str>,
    ) -> RelayPayload {
        RelayPayload {
            access_key: self.access_key.clone(),
            subject,
            email: email.to_string(),
            name: name.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    /// One POST per call. Only a transport failure is an error; any HTTP
    /// status other than 200 is reported as `Rejected`.
    pub async fn submit(&self, payload: &RelayPayload) -> Result<RelayOutcome, reqwest::Error> {
        let response = self
            .http
            .post(&self.submit_url)
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            info!("Relay accepted submission \"{}\"", payload.subject);
            Ok(RelayOutcome::Delivered)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("Relay rejected submission with {}: {}", status, body);
            Ok(RelayOutcome::Rejected(status))
        }
    }
}
