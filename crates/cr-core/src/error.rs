use thiserror::Error;

/// The main error type for cr-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Request exceeded the configured timeout
  #[error("Request timed out after {secs}s")]
  Timeout {
    /// Configured bound that was exceeded
    secs: u64,
  },

  /// Non-2xx HTTP status, transport-level failure, or malformed body.
  ///
  /// `status` is `None` for transport failures (connection refused, DNS);
  /// the taxonomy does not distinguish those from bad-status responses.
  #[error("API response error: {message}")]
  Response {
    /// HTTP status code, when a response was received
    status: Option<u16>,
    /// Upstream error message or status line
    message: String,
  },

  /// Tag contains characters outside the SuperCell tag alphabet
  #[error(
    "The tag {tag:?} is not valid. \
     Invalid characters: {invalid_chars:?}. \
     Valid characters: 0289PYLQGRJCUV"
  )]
  InvalidTag {
    /// The normalized tag that failed validation
    tag: String,
    /// Offending characters in first-seen order, duplicates included
    invalid_chars: Vec<char>,
  },

  /// Access to an attribute absent from both declared fields and raw payload.
  /// This signals a programmer error, not bad remote data.
  #[error("Missing attribute: {0}")]
  MissingAttribute(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),
}

/// Result type alias for cr-* crates
pub type Result<T> = std::result::Result<T, Error>;
