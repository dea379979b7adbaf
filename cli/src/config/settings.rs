//! Application configuration settings.

use std::time::Duration;

use url::Url;

/// Main configuration for schematics-trigger.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Identity token endpoint settings.
    pub iam: IamConfig,
    /// HTTP client and workspace service settings.
    pub api: ApiConfig,
}

/// Identity (IAM) token exchange configuration.
#[derive(Debug, Clone)]
pub struct IamConfig {
    /// Full URL of the token endpoint.
    pub token_url: Url,
    /// Public client id sent as the basic-auth user.
    pub client_id: String,
    /// Public client secret sent as the basic-auth password.
    pub client_secret: String,
    /// Grant type for exchanging an API key.
    pub grant_type: String,
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            token_url: Url::parse("https://iam.example-cloud.com/identity/token")
                .expect("valid default URL"),
            // Public credential shared by every CLI client, encodes to `Yng6Yng=`.
            client_id: "bx".to_string(),
            client_secret: "bx".to_string(),
            grant_type: "urn:ibm:params:oauth:grant-type:apikey".to_string(),
        }
    }
}

/// Workspace service and HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Workspace service base URL.
    pub base_url: Url,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://schematics.example-cloud.com")
                .expect("valid default URL"),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Get the request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Environment variables that can override configuration.
pub mod env {
    pub const IAM_URL: &str = "SCHEMATICS_IAM_URL";
    pub const API_URL: &str = "SCHEMATICS_API_URL";
    pub const TIMEOUT_SECS: &str = "SCHEMATICS_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "SCHEMATICS_LOG";
}

impl AppConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Values that fail to parse are ignored and the current setting is kept.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env::IAM_URL) {
            if let Ok(parsed) = Url::parse(&url) {
                self.iam.token_url = parsed;
            }
        }

        if let Some(url) = lookup(env::API_URL) {
            if let Ok(parsed) = Url::parse(&url) {
                self.api.base_url = parsed;
            }
        }

        if let Some(secs) = lookup(env::TIMEOUT_SECS) {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                self.api.timeout_secs = (secs > 0).then_some(secs);
            }
        }

        self
    }
}
