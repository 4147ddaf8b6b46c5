//! HTTP transport layer: one GET per call, bounded wait, error classification.

use cr_core::{Config, Endpoint, Error, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// The fetch primitive behind every client operation.
///
/// Issues exactly one GET per call; never retries, never backs off. Every
/// failure is classified into the error taxonomy and surfaced unchanged.
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  timeout_secs: u64,
}

impl Transport {
  /// Create a new transport with the configured timeout.
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("cr-client/0.1.0")
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self { client, base_url: config.base_url.clone(), timeout_secs: config.timeout_secs })
  }

  /// Build the full URL for an endpoint.
  ///
  /// `tags` is the already-normalized tag (or comma-joined tag list) path
  /// segment for the endpoints that take one.
  pub fn build_url(&self, endpoint: Endpoint, tags: Option<&str>) -> Result<String> {
    let raw = match tags {
      Some(tags) => format!("{}/{}/{}", self.base_url, endpoint.path(), tags),
      None => format!("{}/{}", self.base_url, endpoint.path()),
    };
    let url = Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid URL {raw}: {e}")))?;
    Ok(url.to_string())
  }

  /// GET a URL and return the parsed JSON body verbatim, object or array.
  ///
  /// Classification: timeout expiry is [`Error::Timeout`]; everything else
  /// (transport failure, non-2xx status, malformed body) is
  /// [`Error::Response`]. No schema validation happens here.
  #[instrument(skip(self))]
  pub async fn get_json(&self, url: &str) -> Result<Value> {
    debug!("Making request to: {}", url);

    let response = self.client.get(url).send().await.map_err(|e| self.classify(e))?;
    let status = response.status();
    let text = response.text().await.map_err(|e| self.classify(e))?;

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Response {
        status: Some(status.as_u16()),
        message: upstream_error_message(&text).unwrap_or_else(|| status.to_string()),
      });
    }

    debug!("Response body length: {} bytes", text.len());
    serde_json::from_str(&text).map_err(|e| Error::Response {
      status: Some(status.as_u16()),
      message: format!("Malformed JSON body: {e}"),
    })
  }

  fn classify(&self, err: reqwest::Error) -> Error {
    if err.is_timeout() {
      Error::Timeout { secs: self.timeout_secs }
    } else {
      Error::Response { status: None, message: err.to_string() }
    }
  }

  /// Get the base URL being used.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

/// Pull the upstream error message field out of an error body, if the body
/// is JSON and carries one.
fn upstream_error_message(body: &str) -> Option<String> {
  let value: Value = serde_json::from_str(body).ok()?;
  for key in ["error", "message"] {
    if let Some(msg) = value.get(key).and_then(Value::as_str) {
      return Some(msg.to_string());
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mock_transport() -> Transport {
    Transport::new(&Config::with_base_url("http://mock.royaleapi.com")).unwrap()
  }

  #[test]
  fn test_build_url_with_tag() {
    let transport = mock_transport();
    let url = transport.build_url(Endpoint::Player, Some("C0G20PR2")).unwrap();
    assert_eq!(url, "http://mock.royaleapi.com/player/C0G20PR2");
  }

  #[test]
  fn test_build_url_with_tag_list() {
    let transport = mock_transport();
    let url = transport.build_url(Endpoint::Clan, Some("2CCCP,8UU2")).unwrap();
    assert_eq!(url, "http://mock.royaleapi.com/clan/2CCCP,8UU2");
  }

  #[test]
  fn test_build_url_without_tag() {
    let transport = mock_transport();
    let url = transport.build_url(Endpoint::TopClans, None).unwrap();
    assert_eq!(url, "http://mock.royaleapi.com/top/clans");
  }

  #[test]
  fn test_upstream_error_message_extraction() {
    assert_eq!(
      upstream_error_message(r#"{"error": "clan not found"}"#).as_deref(),
      Some("clan not found")
    );
    assert_eq!(
      upstream_error_message(r#"{"error": true, "message": "not found"}"#).as_deref(),
      Some("not found")
    );
    assert_eq!(upstream_error_message("<html>502</html>"), None);
    assert_eq!(upstream_error_message(r#"{"status": 500}"#), None);
  }
}
