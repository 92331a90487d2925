//! Application configuration
//!
//! Loaded from the environment (a `.env` file is honored in development).

use std::time::Duration;

const DEFAULT_RESOLVER_URL: &str = "https://dns.google/resolve";
const DEFAULT_VERIFIER_TIMEOUT_SECS: u64 = 5;

/// Runtime configuration for the application layer
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DNS-over-HTTPS endpoint used for MX lookups
    pub email_resolver_url: String,
    /// When false, email verification is syntax-only (offline mode)
    pub email_check_deliverability: bool,
    /// HTTP timeout for the deliverability lookup
    pub email_verifier_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            email_resolver_url: DEFAULT_RESOLVER_URL.to_string(),
            email_check_deliverability: true,
            email_verifier_timeout: Duration::from_secs(DEFAULT_VERIFIER_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(url) = std::env::var("HOMESTAY_EMAIL_RESOLVER_URL") {
            config.email_resolver_url = url;
        }
        if let Ok(flag) = std::env::var("HOMESTAY_EMAIL_CHECK_DELIVERABILITY") {
            config.email_check_deliverability = !matches!(flag.as_str(), "0" | "false" | "off");
        }
        if let Ok(secs) = std::env::var("HOMESTAY_EMAIL_VERIFIER_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.email_verifier_timeout = Duration::from_secs(secs);
            }
        }
        config
    }

    /// Syntax-only verification, for tests and offline development
    pub fn offline() -> Self {
        Self {
            email_check_deliverability: false,
            ..Self::default()
        }
    }
}
