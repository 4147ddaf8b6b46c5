//! # cr-models
//!
//! Read-only entity models over raw Clash Royale API JSON payloads.
//!
//! Every entity wraps its backing payload via [`base::ModelData`]: declared
//! fields are extracted eagerly at construction (substituting defaults when
//! the raw key is absent), undeclared fields remain reachable through the
//! raw passthrough accessor, and `as_payload` round-trips the original JSON
//! unchanged. Equality between fetched entities compares identity tokens
//! (typically the fetch URL), never structure.

pub mod base;
pub mod clan;
pub mod constants;
pub mod core;
pub mod profile;

pub use base::ModelData;
pub use clan::{Clan, ClanMember};
pub use constants::Constants;
pub use self::core::{Arena, Badge, Card, Deck, Region};
pub use profile::{ChestCycle, ClanSummary, Experience, GameStats, PlayerStats, Profile, ShopOffers};
