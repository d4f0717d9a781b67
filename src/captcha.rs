use log::{debug, warn};

use crate::config::RuntimeMode;
use crate::types::CaptchaVerdict;

/// Server-side hCaptcha check. See https://docs.hcaptcha.com/#verify-the-user-response-server-side
pub struct CaptchaVerifier {
    http: reqwest::Client,
    verify_url: String,
    secret: String,
    mode: RuntimeMode,
}

impl CaptchaVerifier {
    pub fn new(http: reqwest::Client, verify_url: String, secret: String, mode: RuntimeMode) -> Self {
        Self {
            http,
            verify_url,
            secret,
            mode,
        }
    }

    /// Returns whether the token proves a human. Transport and decoding
    /// failures count as a failed verification.
    pub async fn verify(&self, token: &str) -> bool {
        if self.mode == RuntimeMode::Development {
            debug!("Development mode, skipping captcha verification");
            return true;
        }

        match self.fetch_verdict(token).await {
            Ok(verdict) => {
                if !verdict.success {
                    warn!("Captcha token rejected by verifier");
                }
                verdict.success
            }
            Err(e) => {
                warn!("Captcha verification request failed: {}", e);
                false
            }
        }
    }

    async fn fetch_verdict(&self, token: &str) -> Result<CaptchaVerdict, reqwest::Error> {
        self.http
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await?
            .json::<CaptchaVerdict>()
            .await
    }
}
