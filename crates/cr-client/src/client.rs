//! Client facade: tag normalization, URL construction, entity wrapping.

use crate::transport::Transport;
use cr_core::{Config, Endpoint, Error, Result, Tag};
use cr_models::{Clan, Constants, Profile};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Main Clash Royale API client.
///
/// Each operation performs exactly one network round trip; batch variants
/// batch server-side via comma-joined tags. Operations may be issued
/// concurrently and share no mutable state. Failures propagate unchanged;
/// a caller that wants retries re-invokes the operation.
///
/// # Examples
///
/// ```ignore
/// use cr_client::ClashRoyaleClient;
/// use cr_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ClashRoyaleClient::new(Config::from_env()?)?;
///
///     let profile = client.get_profile("#C0G20PR2").await?;
///     println!("{}: {} trophies", profile.name.as_deref().unwrap_or("?"),
///              profile.trophies.unwrap_or(0));
///
///     let clan = client.get_clan("2CCCP").await?;
///     println!("{} members", clan.members.len());
///
///     Ok(())
/// }
/// ```
pub struct ClashRoyaleClient {
  transport: Arc<Transport>,
}

impl ClashRoyaleClient {
  /// Create a new client from an explicit configuration value.
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Get a player profile by tag.
  ///
  /// The tag is normalized and validated before any network I/O; an invalid
  /// or empty tag fails with [`Error::InvalidTag`] without issuing a request.
  #[instrument(skip(self))]
  pub async fn get_profile(&self, tag: &str) -> Result<Profile> {
    let tag = canonical_tag(tag)?;
    let url = self.transport.build_url(Endpoint::Player, Some(tag.as_str()))?;
    let data = self.transport.get_json(&url).await?;
    Ok(Profile::new(data, Some(url)))
  }

  /// Get multiple player profiles with one comma-joined batch request.
  ///
  /// Profiles come back in input order. There is no partial success: any
  /// failure fails the whole batch.
  #[instrument(skip(self, tags))]
  pub async fn get_profiles(&self, tags: &[impl AsRef<str>]) -> Result<Vec<Profile>> {
    let joined = join_tags(tags)?;
    let url = self.transport.build_url(Endpoint::Player, Some(&joined))?;
    let data = self.transport.get_json(&url).await?;
    let items = expect_array(data)?;
    Ok(items.into_iter().map(|d| Profile::new(d, Some(url.clone()))).collect())
  }

  /// Get a clan by tag.
  #[instrument(skip(self))]
  pub async fn get_clan(&self, tag: &str) -> Result<Clan> {
    let tag = canonical_tag(tag)?;
    let url = self.transport.build_url(Endpoint::Clan, Some(tag.as_str()))?;
    let mut data = self.transport.get_json(&url).await?;
    // API quirk: the single-clan endpoint sometimes wraps its result in a
    // one-element array.
    if let Value::Array(items) = data {
      data = items.into_iter().next().ok_or_else(|| Error::Response {
        status: None,
        message: "Empty array response for clan".to_string(),
      })?;
    }
    Ok(Clan::new(data, Some(url)))
  }

  /// Get multiple clans with one comma-joined batch request.
  #[instrument(skip(self, tags))]
  pub async fn get_clans(&self, tags: &[impl AsRef<str>]) -> Result<Vec<Clan>> {
    let joined = join_tags(tags)?;
    let url = self.transport.build_url(Endpoint::Clan, Some(&joined))?;
    let data = self.transport.get_json(&url).await?;
    let items = expect_array(data)?;
    Ok(items.into_iter().map(|d| Clan::new(d, Some(url.clone()))).collect())
  }

  /// Get the top-clan leaderboard as raw JSON.
  #[instrument(skip(self))]
  pub async fn get_top_clans(&self) -> Result<Value> {
    let url = self.transport.build_url(Endpoint::TopClans, None)?;
    self.transport.get_json(&url).await
  }

  /// Get the game constants.
  #[instrument(skip(self))]
  pub async fn get_constants(&self) -> Result<Constants> {
    let url = self.transport.build_url(Endpoint::Constants, None)?;
    let data = self.transport.get_json(&url).await?;
    Ok(Constants::new(data, Some(url)))
  }
}

impl std::fmt::Debug for ClashRoyaleClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClashRoyaleClient").field("transport", &self.transport).finish()
  }
}

/// Normalize raw input into a canonical, non-empty, valid tag.
///
/// An empty tag would produce a URL pointing at the endpoint root, so it is
/// rejected here even though the normalizer treats it as vacuously valid.
fn canonical_tag(raw: &str) -> Result<Tag> {
  let tag = Tag::new(raw).validated()?;
  if tag.as_str().is_empty() {
    return Err(Error::InvalidTag { tag: String::new(), invalid_chars: vec![] });
  }
  Ok(tag)
}

/// Canonicalize and comma-join a batch of tags.
fn join_tags(tags: &[impl AsRef<str>]) -> Result<String> {
  if tags.is_empty() {
    return Err(Error::Config("No tags supplied for batch request".to_string()));
  }
  let canonical: Vec<String> = tags
    .iter()
    .map(|tag| canonical_tag(tag.as_ref()).map(String::from))
    .collect::<Result<_>>()?;
  Ok(canonical.join(","))
}

/// Require an array body for a batch response.
fn expect_array(data: Value) -> Result<Vec<Value>> {
  match data {
    Value::Array(items) => Ok(items),
    _ => Err(Error::Response {
      status: None,
      message: "Expected array response for batch request".to_string(),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_client_creation() {
    let client = ClashRoyaleClient::new(Config::default()).expect("Failed to create client");
    let _ = format!("{client:?}");
  }

  #[test]
  fn test_canonical_tag_normalizes() {
    assert_eq!(canonical_tag("#c0g20pr2").unwrap().as_str(), "C0G20PR2");
    assert_eq!(canonical_tag("PYOVC98C").unwrap().as_str(), "PY0VC98C");
  }

  #[test]
  fn test_canonical_tag_rejects_invalid() {
    assert!(matches!(canonical_tag("C0G20PR!"), Err(Error::InvalidTag { .. })));
  }

  #[test]
  fn test_canonical_tag_rejects_empty() {
    assert!(matches!(canonical_tag("#"), Err(Error::InvalidTag { .. })));
  }

  #[test]
  fn test_join_tags() {
    assert_eq!(join_tags(&["#2cccp", "8uu2"]).unwrap(), "2CCCP,8UU2");
  }

  #[test]
  fn test_join_tags_rejects_empty_batch() {
    let tags: [&str; 0] = [];
    assert!(matches!(join_tags(&tags), Err(Error::Config(_))));
  }

  #[test]
  fn test_join_tags_fails_on_any_invalid_tag() {
    assert!(matches!(join_tags(&["2CCCP", "BAD!"]), Err(Error::InvalidTag { .. })));
  }

  #[test]
  fn test_expect_array() {
    assert_eq!(expect_array(json!([1, 2])).unwrap().len(), 2);
    assert!(matches!(expect_array(json!({"a": 1})), Err(Error::Response { status: None, .. })));
  }
}
