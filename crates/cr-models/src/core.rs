//! Core entity models shared by profiles and clans.

use crate::base::{bool_of, i64_of, str_of, str_or, ModelData};
use cr_core::Result;
use serde_json::Value;

/// Badge URL substituted when a clan badge fragment is missing.
pub const NO_CLAN_BADGE_URL: &str = "http://smlbiobot.github.io/img/emblems/NoClan.png";

/// A single card.
#[derive(Debug, Clone)]
pub struct Card {
  data: ModelData,
  /// Card name
  pub name: Option<String>,
  /// Stable card key
  pub key: Option<String>,
  /// Rarity (Common, Rare, Epic, Legendary)
  pub rarity: Option<String>,
  /// Upgrade level
  pub level: Option<i64>,
  /// Copies owned
  pub count: Option<i64>,
  /// Copies required for the next upgrade
  pub required_for_upgrade: Option<i64>,
  /// Copies still missing for the next upgrade
  pub left_to_upgrade: Option<i64>,
  /// Numeric card id
  pub card_id: Option<i64>,
  /// Elixir cost
  pub elixir: Option<i64>,
  /// Card type (Troop, Spell, Building)
  pub card_type: Option<String>,
  /// Arena the card unlocks in
  pub arena: Option<i64>,
  /// Flavor text
  pub description: Option<String>,
}

impl Card {
  /// Build a card from its raw payload.
  pub fn new(payload: Value) -> Self {
    Self {
      name: str_of(&payload, "name"),
      key: str_of(&payload, "key"),
      rarity: str_of(&payload, "rarity"),
      level: i64_of(&payload, "level"),
      count: i64_of(&payload, "count"),
      required_for_upgrade: i64_of(&payload, "requiredForUpgrade"),
      left_to_upgrade: i64_of(&payload, "leftToUpgrade"),
      card_id: i64_of(&payload, "card_id"),
      elixir: i64_of(&payload, "elixir"),
      card_type: str_of(&payload, "type"),
      arena: i64_of(&payload, "arena"),
      description: str_of(&payload, "description"),
      data: ModelData::new(payload, None),
    }
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }

  /// The original backing payload.
  pub fn as_payload(&self) -> &Value {
    self.data.as_payload()
  }
}

/// A deck: the ordered cards of an array payload.
#[derive(Debug, Clone)]
pub struct Deck {
  data: ModelData,
  /// Cards in payload order
  pub cards: Vec<Card>,
}

impl Deck {
  /// Build a deck from a raw array payload. A missing or non-array payload
  /// yields an empty deck.
  pub fn new(payload: Value) -> Self {
    let cards = payload
      .as_array()
      .map(|cards| cards.iter().cloned().map(Card::new).collect())
      .unwrap_or_default();
    Self { cards, data: ModelData::new(payload, None) }
  }

  /// The original backing payload.
  pub fn as_payload(&self) -> &Value {
    self.data.as_payload()
  }
}

/// A clan badge.
#[derive(Debug, Clone)]
pub struct Badge {
  data: ModelData,
  /// Badge image URL, defaults to the "no clan" emblem
  pub url: String,
  /// Image filename
  pub filename: Option<String>,
  /// Stable badge key
  pub key: Option<String>,
}

impl Badge {
  /// Build a badge from its raw payload.
  pub fn new(payload: Value) -> Self {
    Self {
      url: str_or(&payload, "url", NO_CLAN_BADGE_URL),
      filename: str_of(&payload, "filename"),
      key: str_of(&payload, "key"),
      data: ModelData::new(payload, None),
    }
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }
}

/// A clan's home region.
#[derive(Debug, Clone)]
pub struct Region {
  data: ModelData,
  /// Region name
  pub name: Option<String>,
  /// Whether the region is a country
  pub is_country: Option<bool>,
}

impl Region {
  /// Build a region from its raw payload.
  pub fn new(payload: Value) -> Self {
    Self {
      name: str_of(&payload, "name"),
      is_country: bool_of(&payload, "isCountry"),
      data: ModelData::new(payload, None),
    }
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }
}

/// An arena (or league, for arena ids past the last arena).
#[derive(Debug, Clone)]
pub struct Arena {
  data: ModelData,
  /// Arena name, e.g. "Hog Mountain"
  pub name: Option<String>,
  /// Arena label, e.g. "Arena 10"
  pub arena: Option<String>,
  /// Numeric arena id
  pub arena_id: Option<i64>,
  /// Trophy threshold to enter the arena
  pub trophy_limit: Option<i64>,
  /// Arena image URL
  pub image_url: Option<String>,
}

impl Arena {
  /// Build an arena from its raw payload.
  pub fn new(payload: Value) -> Self {
    Self {
      name: str_of(&payload, "name"),
      arena: str_of(&payload, "arena"),
      arena_id: i64_of(&payload, "arenaID"),
      trophy_limit: i64_of(&payload, "trophyLimit"),
      image_url: str_of(&payload, "imageURL"),
      data: ModelData::new(payload, None),
    }
  }

  /// League number derived from the arena id; 0 when still in the arenas.
  pub fn league(&self) -> i64 {
    self.arena_id.map(|id| (id - 11).max(0)).unwrap_or(0)
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }
}
