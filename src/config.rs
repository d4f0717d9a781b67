pub const DEFAULT_VERIFY_URL: &str = "https://hcaptcha.com/siteverify";
pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Only an explicit `development` disables captcha verification.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }
}

#[derive(Clone)]
pub struct Settings {
    pub captcha_secret: String,
    pub captcha_site_key: String,
    pub relay_access_key: String,
    pub mode: RuntimeMode,
    pub verify_url: String,
    pub relay_url: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            captcha_secret: lookup("HCAPTCHA_SECRET").unwrap_or_default(),
            captcha_site_key: lookup("HCAPTCHA_SITE_KEY").unwrap_or_default(),
            relay_access_key: lookup("ACCESS_KEY").unwrap_or_default(),
            mode: lookup("APP_ENV")
                .map(|v| RuntimeMode::parse(&v))
                .unwrap_or(RuntimeMode::Production),
            verify_url: or_default("HCAPTCHA_VERIFY_URL", DEFAULT_VERIFY_URL),
            relay_url: or_default("RELAY_SUBMIT_URL", DEFAULT_RELAY_URL),
            port: lookup("COMING_SOON_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

// Keeps secrets out of debug logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("captcha_site_key", &self.captcha_site_key)
            .field("mode", &self.mode)
            .field("verify_url", &self.verify_url)
            .field("relay_url", &self.relay_url)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}
