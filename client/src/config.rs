//! # Client Configuration
//!
//! Loaded from environment variables:
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | `ALIGNERR_API_URL` | `http://localhost:8000` | backend origin |
//! | `ALIGNERR_STORAGE_DIR` | `$HOME/.config/alignerr` | where the session file lives |
//! | `ALIGNERR_REQUEST_TIMEOUT_SECS` | unset (no timeout) | per-request timeout |

use crate::core::error::{AppError, Result};
use lib_utils::envs::{get_env_or, get_env_parse_opt};
use std::path::PathBuf;
use std::time::Duration;

/// Local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash.
    pub api_url: String,
    /// Directory holding the persisted session.
    pub storage_dir: PathBuf,
    /// Per-request timeout. `None` lets a hung request wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_dir: default_storage_dir(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = get_env_or("ALIGNERR_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let storage_dir = match get_env_parse_opt::<PathBuf>("ALIGNERR_STORAGE_DIR")? {
            Some(dir) => dir,
            None => default_storage_dir(),
        };

        let request_timeout =
            get_env_parse_opt::<u64>("ALIGNERR_REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            api_url,
            storage_dir,
            request_timeout,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "ALIGNERR_API_URL must start with http:// or https://, got {}",
                self.api_url
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config(
                "ALIGNERR_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_storage_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join("alignerr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert!(config.request_timeout.is_none());
        assert!(config.storage_dir.ends_with(".config/alignerr"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_schemeless_origin() {
        let config = ClientConfig {
            api_url: "localhost:8000".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Some(Duration::ZERO),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
