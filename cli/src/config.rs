//! Environment-driven configuration for `submit-product`.
//!
//! | Variable            | Required | Default                              |
//! |---------------------|----------|--------------------------------------|
//! | `PRODUCT_API_URL`   | no       | `https://dummyjson.com/products/add` |
//! | `HTTP_TIMEOUT_SECS` | no       | none (no timeout)                    |

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products/add";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HTTP_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("PRODUCT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match lookup("HTTP_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self { api_url, timeout })
    }
}
