//! Backend location.

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the hotel backend (or its gateway) listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL (trailing slashes are dropped).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless `raw` is an `http://` or
    /// `https://` URL with a host part.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.is_empty() => Ok(Self { base_url: trimmed.to_owned() }),
            _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
        }
    }

    /// Build from an optional configured value, defaulting when absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a present but malformed value.
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Self::new(value),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/auth/login`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
