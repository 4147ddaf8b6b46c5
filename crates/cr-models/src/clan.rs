//! Clan and clan member models.

use crate::base::{fragment, i64_of, i64_or, str_of, ModelData};
use crate::core::{Arena, Badge, Region};
use cr_core::Result;
use serde_json::Value;

/// A member of a clan.
///
/// The raw member payload does not name its clan, so the parent clan's
/// name and tag are injected at construction.
#[derive(Debug, Clone)]
pub struct ClanMember {
  data: ModelData,
  /// In-game name
  pub name: Option<String>,
  /// Player tag
  pub tag: Option<String>,
  /// Trophies
  pub score: Option<i64>,
  /// Donations this week
  pub donations: Option<i64>,
  /// Crowns contributed to the clan chest
  pub clan_chest_crowns: Option<i64>,
  /// Experience level
  pub exp_level: Option<i64>,
  /// Numeric role id
  pub role_id: Option<i64>,
  /// Role name (Member, Elder, Co-Leader, Leader)
  pub role_name: Option<String>,
  /// Rank within the clan, 1-based, lower is better
  pub current_rank: i64,
  /// Rank at the previous refresh; 0 means new to the clan
  pub previous_rank: i64,
  /// Member's current arena
  pub arena: Arena,
  /// Parent clan name, inherited from the enclosing clan payload
  pub clan_name: Option<String>,
  /// Parent clan tag, inherited from the enclosing clan payload
  pub clan_tag: Option<String>,
}

impl ClanMember {
  /// Build a member from its raw payload, annotated with the parent clan.
  pub fn new(payload: Value, clan_name: Option<&str>, clan_tag: Option<&str>) -> Self {
    Self {
      name: str_of(&payload, "name"),
      tag: str_of(&payload, "tag"),
      score: i64_of(&payload, "score"),
      donations: i64_of(&payload, "donations"),
      clan_chest_crowns: i64_of(&payload, "clanChestCrowns"),
      exp_level: i64_of(&payload, "expLevel"),
      role_id: i64_of(&payload, "role"),
      role_name: str_of(&payload, "roleName"),
      current_rank: i64_or(&payload, "currentRank", 0),
      previous_rank: i64_or(&payload, "previousRank", 0),
      arena: Arena::new(fragment(&payload, "arena")),
      clan_name: clan_name.map(str::to_string),
      clan_tag: clan_tag.map(str::to_string),
      data: ModelData::new(payload, None),
    }
  }

  /// Rank movement since the previous refresh.
  ///
  /// `None` when `previous_rank` is 0 (new member, no history). Positive
  /// means the member dropped, negative means they climbed; rank is
  /// best-when-lower.
  pub fn rank_delta(&self) -> Option<i64> {
    if self.previous_rank == 0 {
      None
    } else {
      Some(self.current_rank - self.previous_rank)
    }
  }

  /// Arena as "Arena 10: Hog Mountain".
  pub fn arena_display(&self) -> String {
    format!(
      "{}: {}",
      self.arena.arena.as_deref().unwrap_or(""),
      self.arena.name.as_deref().unwrap_or("")
    )
  }

  /// True if the member holds the named role.
  pub fn has_role(&self, role_name: &str) -> bool {
    self.role_name.as_deref() == Some(role_name)
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

/// A clan.
#[derive(Debug, Clone)]
pub struct Clan {
  data: ModelData,
  /// Clan tag
  pub tag: Option<String>,
  /// Clan name
  pub name: Option<String>,
  /// Clan description
  pub description: Option<String>,
  /// Numeric clan type
  pub type_id: Option<i64>,
  /// Clan type name (Open, Invite Only, Closed)
  pub type_name: Option<String>,
  /// Clan trophies
  pub score: Option<i64>,
  /// Member count
  pub member_count: Option<i64>,
  /// Trophy requirement to join
  pub required_score: Option<i64>,
  /// Donations this week
  pub donations: Option<i64>,
  /// Leaderboard rank
  pub current_rank: Option<i64>,
  /// Clan badge
  pub badge: Badge,
  /// Home region
  pub region: Region,
  /// Members in payload order, annotated with this clan's name and tag
  pub members: Vec<ClanMember>,
}

impl Clan {
  /// Build a clan from its raw payload.
  ///
  /// `identity` is the URL the payload was fetched from and is the sole
  /// input to clan equality.
  pub fn new(payload: Value, identity: Option<String>) -> Self {
    let name = str_of(&payload, "name");
    let tag = str_of(&payload, "tag");
    let members = payload
      .get("members")
      .and_then(Value::as_array)
      .map(|members| {
        members
          .iter()
          .cloned()
          .map(|m| ClanMember::new(m, name.as_deref(), tag.as_deref()))
          .collect()
      })
      .unwrap_or_default();
    Self {
      description: str_of(&payload, "description"),
      type_id: i64_of(&payload, "type"),
      type_name: str_of(&payload, "typeName"),
      score: i64_of(&payload, "score"),
      member_count: i64_of(&payload, "memberCount"),
      required_score: i64_of(&payload, "requiredScore"),
      donations: i64_of(&payload, "donations"),
      current_rank: i64_of(&payload, "currentRank"),
      badge: Badge::new(fragment(&payload, "badge")),
      region: Region::new(fragment(&payload, "region")),
      members,
      name,
      tag,
      data: ModelData::new(payload, identity),
    }
  }

  /// Tags of all members, in member order.
  pub fn member_tags(&self) -> Vec<String> {
    self.members.iter().filter_map(|m| m.tag.clone()).collect()
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }

  /// The original backing payload.
  pub fn as_payload(&self) -> &Value {
    self.data.as_payload()
  }

  /// Canonical JSON text of the backing payload.
  pub fn to_json_string(&self) -> Result<String> {
    self.data.to_json_string()
  }

  /// Identity token (fetch URL).
  pub fn identity(&self) -> Option<&str> {
    self.data.identity()
  }
}

/// Clans compare by identity token, never by payload content.
impl PartialEq for Clan {
  fn eq(&self, other: &Self) -> bool {
    self.data.identity() == other.data.identity()
  }
}
