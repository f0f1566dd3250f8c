//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Largest page the catalog will serve.
pub const MAX_PAGE_SIZE: usize = 100;

/// Upper bound for `max_retries`.
pub const MAX_RETRIES: u32 = 10;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The catalog base URL.
    pub base_url: String,
    /// Rows per page.
    pub page_size: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Retries after a transient failure; a fetch makes at most
    /// `max_retries + 1` attempts.
    pub max_retries: u32,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// The UI theme to use ("dark" or "light").
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
            max_retries: 2,
            tick_rate_ms: 100,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs cannot be zero".to_string(),
            ));
        }

        if self.max_retries > MAX_RETRIES {
            return Err(ConfigError::ValidationError(format!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES, self.max_retries
            )));
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms cannot be zero".to_string(),
            ));
        }

        if !matches!(self.theme.as_str(), "dark" | "light") {
            return Err(ConfigError::ValidationError(format!(
                "theme must be \"dark\" or \"light\", got \"{}\"",
                self.theme
            )));
        }

        Ok(())
    }
}
