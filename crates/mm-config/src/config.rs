use crate::{ApiCredentials, ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use log::info;
use serde::Deserialize;

/// Connection settings for the ERPNext instance behind the site.
///
/// Read from the process environment once at startup and handed to the
/// gateway constructor; nothing else in the workspace touches the
/// environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the ERPNext instance. A trailing slash is tolerated and
    /// trimmed by the gateway.
    pub api_url: String,
    /// Key half of the API credential pair.
    pub api_key: Option<String>,
    /// Secret half of the API credential pair.
    pub api_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            api_key: None,
            api_secret: None,
        }
    }
}

impl Config {
    /// Load config from the process environment.
    ///
    /// `MM_API_URL` overrides the built-in default URL; `MM_API_KEY` and
    /// `MM_API_SECRET` have no default. Does NOT validate - call
    /// `validate()` after loading.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Validate the loaded configuration.
    /// Call after `from_env()` to catch bad values at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_url.is_empty() {
            return Err(ConfigError::config("api_url must not be empty"));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "api_url must start with http:// or https://, got {}",
                self.api_url
            )));
        }

        Ok(())
    }

    /// The credential pair, present only when both halves are set and
    /// non-empty.
    pub fn credentials(&self) -> Option<ApiCredentials> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(ApiCredentials::new(key, secret))
            }
            _ => None,
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api_url: {}", self.api_url);
        info!(
            "  credentials: {}",
            if self.credentials().is_some() {
                "configured"
            } else {
                "missing"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_string("MM_API_URL", &mut self.api_url);
        Self::apply_env_option_string("MM_API_KEY", &mut self.api_key);
        Self::apply_env_option_string("MM_API_SECRET", &mut self.api_secret);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
