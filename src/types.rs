use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact` and `POST /api/subscribe`.
///
/// Every field is optional on the wire so that a missing field and an empty
/// one reach the validator the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// JSON document posted to the form relay.
#[derive(Debug, Clone, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub subject: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaptchaVerdict {
    #[serde(default)]
    pub success: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}
