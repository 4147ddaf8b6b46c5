//! Configuration for the Clash Royale API client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the client
///
/// Passed explicitly into the client at construction; there is no
/// module-level global configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the Clash Royale API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("CR_API_BASE_URL").unwrap_or_else(|_| crate::CR_API_BASE_URL.to_string());

    let timeout_secs = env::var("CR_API_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CR_API_TIMEOUT_SECS".to_string()))?;

    Ok(Config { base_url, timeout_secs })
  }

  /// Create a config pointed at a specific base URL (used by tests)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), timeout_secs: crate::DEFAULT_TIMEOUT_SECS }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::CR_API_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.base_url, "http://api.royaleapi.com");
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_config_with_base_url() {
    let config = Config::with_base_url("http://localhost:8080");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 30);
  }
}
