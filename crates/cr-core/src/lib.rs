pub mod config;
pub mod error;
pub mod tag;

pub use config::Config;
pub use error::{Error, Result};
pub use tag::Tag;

/// The API endpoints exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// Player profile by tag (or comma-joined tag list)
  Player,
  /// Clan by tag (or comma-joined tag list)
  Clan,
  /// Top clan leaderboard, no tag
  TopClans,
  /// Game constants, no tag
  Constants,
}

impl Endpoint {
  /// Path segment under the base URL.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::Player => "player",
      Endpoint::Clan => "clan",
      Endpoint::TopClans => "top/clans",
      Endpoint::Constants => "constants",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.path())
  }
}

/// Base URL for the Clash Royale API
pub const CR_API_BASE_URL: &str = "http://api.royaleapi.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
