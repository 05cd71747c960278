//! Partner API configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration loaded from `cartctl.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartctlConfig {
    /// Partner API configuration.
    #[serde(default)]
    pub api: PartnerApiConfig,
}

impl CartctlConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Partner API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartnerApiConfig {
    /// Versioned API base URL; resource paths are joined onto it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Locale sent with every request.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for PartnerApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout(), locale: default_locale() }
    }
}

impl PartnerApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api_url must use http or https: {}",
                self.api_url
            )));
        }
        if !self.api_url.path().ends_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "api_url must end with '/': {}",
                self.api_url
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(AppError::InvalidConfig("locale must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.partnercenter.microsoft.com/v1/")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_locale() -> String {
    "en-US".to_string()
}
