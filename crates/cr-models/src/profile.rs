//! Player profile model and its sections.

use crate::base::{bool_of, fragment, i64_of, i64_or, str_of, str_or, ModelData};
use crate::core::{Arena, Badge, Deck};
use cr_core::Result;
use serde_json::Value;

/// Clan name substituted when a profile has no clan fragment.
pub const NO_CLAN_NAME: &str = "No Clan";

/// Clan role substituted when a profile has no clan fragment.
pub const NO_CLAN_ROLE: &str = "N/A";

/// The clan fragment embedded in a player profile.
///
/// This is a summary, not the full clan model the clan endpoint returns; a
/// profile without a clan yields the default "No Clan" state rather than an
/// absent value.
#[derive(Debug, Clone)]
pub struct ClanSummary {
  data: ModelData,
  /// Clan name, "No Clan" when the player is clanless
  pub name: String,
  /// Clan tag
  pub tag: Option<String>,
  /// Player's role in the clan, "N/A" when clanless
  pub role: String,
  /// Clan badge
  pub badge: Badge,
}

impl ClanSummary {
  /// Build a clan summary from the profile's `clan` fragment.
  pub fn new(payload: Value) -> Self {
    Self {
      name: str_or(&payload, "name", NO_CLAN_NAME),
      tag: str_of(&payload, "tag"),
      role: str_or(&payload, "role", NO_CLAN_ROLE),
      badge: Badge::new(fragment(&payload, "badge")),
      data: ModelData::new(payload, None),
    }
  }

  /// Raw access to an undeclared payload field.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self.data.get(key)
  }
}

/// Experience section of a profile.
#[derive(Debug, Clone)]
pub struct Experience {
  /// XP level
  pub level: Option<i64>,
  /// XP within the current level
  pub xp: Option<i64>,
  /// XP required for the next level, absent at max level
  pub xp_required: Option<i64>,
}

impl Experience {
  fn new(payload: &Value) -> Self {
    Self {
      level: i64_of(payload, "level"),
      xp: i64_of(payload, "xp"),
      xp_required: i64_of(payload, "xpRequiredForLevelUp"),
    }
  }

  /// Experience as "current / total", or "MAX / MAX" at max level.
  pub fn xp_display(&self) -> String {
    match self.xp_required {
      Some(total) => {
        format!("{} / {}", group_digits(self.xp.unwrap_or(0)), group_digits(total))
      }
      None => "MAX / MAX".to_string(),
    }
  }
}

/// Lifetime stats section of a profile.
#[derive(Debug, Clone)]
pub struct PlayerStats {
  /// Legendary trophies
  pub legendary_trophies: i64,
  /// Personal best trophies
  pub max_trophies: i64,
  /// Tournament cards won
  pub tournament_cards_won: i64,
  /// Three-crown wins
  pub three_crown_wins: i64,
  /// Distinct cards found
  pub cards_found: i64,
  /// Favorite card; raw value since the shape varies across API versions
  pub favorite_card: Value,
  /// Total donations
  pub total_donations: i64,
  /// Best challenge win count
  pub challenge_max_wins: i64,
  /// Challenge cards won
  pub challenge_cards_won: i64,
  /// Account level as reported in the stats block
  pub level: i64,
}

impl PlayerStats {
  fn new(payload: &Value) -> Self {
    Self {
      legendary_trophies: i64_or(payload, "legendaryTrophies", 0),
      max_trophies: i64_or(payload, "maxTrophies", 0),
      tournament_cards_won: i64_or(payload, "tournamentCardsWon", 0),
      three_crown_wins: i64_or(payload, "threeCrownWins", 0),
      cards_found: i64_or(payload, "cardsFound", 0),
      favorite_card: fragment(payload, "favoriteCard"),
      total_donations: i64_or(payload, "totalDonations", 0),
      challenge_max_wins: i64_or(payload, "challengeMaxWins", 0),
      challenge_cards_won: i64_or(payload, "challengeCardsWon", 0),
      level: i64_or(payload, "level", 0),
    }
  }
}

/// Ladder game record section of a profile.
#[derive(Debug, Clone)]
pub struct GameStats {
  /// Total games played
  pub total: i64,
  /// Tournament games played
  pub tournament_games: i64,
  /// Wins
  pub wins: i64,
  /// Losses
  pub losses: i64,
  /// Draws
  pub draws: i64,
  /// Current win streak, floored at 0 (the API reports losses as negatives)
  pub win_streak: i64,
}

impl GameStats {
  fn new(payload: &Value) -> Self {
    Self {
      total: i64_or(payload, "total", 0),
      tournament_games: i64_or(payload, "tournamentGames", 0),
      wins: i64_or(payload, "wins", 0),
      losses: i64_or(payload, "losses", 0),
      draws: i64_or(payload, "draws", 0),
      win_streak: i64_or(payload, "currentWinStreak", 0).max(0),
    }
  }
}

/// Chest cycle section of a profile.
#[derive(Debug, Clone)]
pub struct ChestCycle {
  /// Current position in the cycle (equals chests opened)
  pub position: Option<i64>,
  /// Position of the next super magical chest
  pub super_magical_pos: Option<i64>,
  /// Position of the next legendary chest
  pub legendary_pos: Option<i64>,
  /// Position of the next epic chest
  pub epic_pos: Option<i64>,
}

impl ChestCycle {
  fn new(payload: &Value) -> Self {
    Self {
      position: i64_of(payload, "position"),
      super_magical_pos: i64_of(payload, "superMagicalPos"),
      legendary_pos: i64_of(payload, "legendaryPos"),
      epic_pos: i64_of(payload, "epicPos"),
    }
  }
}

/// Shop offer section of a profile. Values are days until the offer.
#[derive(Debug, Clone)]
pub struct ShopOffers {
  /// Legendary chest offer
  pub legendary: Option<i64>,
  /// Epic chest offer
  pub epic: Option<i64>,
  /// Arena pack offer
  pub arena: Option<i64>,
}

impl ShopOffers {
  fn new(payload: &Value) -> Self {
    Self {
      legendary: i64_of(payload, "legendary"),
      epic: i64_of(payload, "epic"),
      arena: i64_of(payload, "arena"),
    }
  }
}

/// A player profile.
#[derive(Debug, Clone)]
pub struct Profile {
  data: ModelData,
  /// Unique player tag
  pub tag: Option<String>,
  /// In-game name
  pub name: Option<String>,
  /// Current trophies
  pub trophies: Option<i64>,
  /// Whether the free name change has been used
  pub name_changed: Option<bool>,
  /// Global ladder rank, absent for unranked players
  pub global_rank: Option<i64>,
  /// Clan summary, "No Clan" defaults when the player is clanless
  pub clan: ClanSummary,
  /// Clan badge (from the clan fragment)
  pub badge: Badge,
  /// Current arena
  pub arena: Arena,
  /// Experience section
  pub experience: Experience,
  /// Lifetime stats section
  pub stats: PlayerStats,
  /// Game record section
  pub games: GameStats,
  /// Chest cycle section
  pub chest_cycle: ChestCycle,
  /// Shop offers section
  pub shop_offers: ShopOffers,
  /// Current deck
  pub deck: Deck,
}

impl Profile {
  /// Build a profile from its raw payload.
  ///
  /// `identity` is the URL the payload was fetched from and is the sole
  /// input to profile equality.
  pub fn new(payload: Value, identity: Option<String>) -> Self {
    let clan = ClanSummary::new(fragment(&payload, "clan"));
    let badge = clan.badge.clone();
    Self {
      tag: str_of(&payload, "tag"),
      name: str_of(&payload, "name"),
      trophies: i64_of(&payload, "trophies"),
      name_changed: bool_of(&payload, "nameChanged"),
      global_rank: i64_of(&payload, "globalRank"),
      clan,
      badge,
      arena: Arena::new(fragment(&payload, "arena")),
      experience: Experience::new(&fragment(&payload, "experience")),
      stats: PlayerStats::new(&fragment(&payload, "stats")),
      games: GameStats::new(&fragment(&payload, "games")),
      chest_cycle: ChestCycle::new(&fragment(&payload, "chestCycle")),
      shop_offers: ShopOffers::new(&fragment(&payload, "shopOffers")),
      deck: Deck::new(fragment(&payload, "currentDeck")),
      data: ModelData::new(payload, identity),
    }
  }

  /// Clan name, "No Clan" when clanless.
  pub fn clan_name(&self) -> &str {
    &self.clan.name
  }

  /// Clan role, "N/A" when clanless.
  pub fn clan_role(&self) -> &str {
    &self.clan.role
  }

  /// True when the profile carries no clan fragment.
  pub fn not_in_clan(&self) -> bool {
    self.clan.tag.is_none()
  }

  /// Number of chests opened (the chest cycle position).
  pub fn chests_opened(&self) -> Option<i64> {
    self.chest_cycle.position
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

/// Profiles compare by identity token, never by payload content. Two
/// profiles fetched from the same URL are equal even if the payloads
/// drifted between fetches.
impl PartialEq for Profile {
  fn eq(&self, other: &Self) -> bool {
    self.data.identity() == other.data.identity()
  }
}

/// Format an integer with thousands separators, e.g. 52841 -> "52,841".
fn group_digits(n: i64) -> String {
  let digits = n.unsigned_abs().to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
  if n < 0 {
    out.push('-');
  }
  let lead = digits.len() % 3;
  for (i, c) in digits.chars().enumerate() {
    if i != 0 && i % 3 == lead % 3 {
      out.push(',');
    }
    out.push(c);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn fixture() -> Value {
    json!({
      "tag": "C0G20PR2",
      "name": "SML",
      "trophies": 4223,
      "nameChanged": true,
      "globalRank": null,
      "clan": {
        "tag": "2CCCP",
        "name": "Reddit Delta",
        "role": "Leader",
        "badge": {"url": "/badge/reddit.png", "key": "reddit"}
      },
      "arena": {"name": "Hog Mountain", "arena": "Arena 10", "arenaID": 10, "trophyLimit": 3800},
      "experience": {"level": 12, "xp": 52841, "xpRequiredForLevelUp": 88000},
      "stats": {
        "legendaryTrophies": 1991,
        "maxTrophies": 4361,
        "threeCrownWins": 1020,
        "cardsFound": 71,
        "favoriteCard": "P.E.K.K.A",
        "totalDonations": 1951
      },
      "games": {"total": 4559, "wins": 2250, "losses": 1849, "draws": 460, "currentWinStreak": -3},
      "chestCycle": {"position": 1222, "superMagicalPos": 1586, "legendaryPos": 1283, "epicPos": 1237},
      "shopOffers": {"legendary": 2, "epic": 0, "arena": null},
      "currentDeck": [{"name": "Miner"}, {"name": "Zap"}]
    })
  }

  #[test]
  fn test_profile_fixture_fields() {
    let profile = Profile::new(fixture(), Some("http://api/player/C0G20PR2".to_string()));
    assert_eq!(profile.name.as_deref(), Some("SML"));
    assert_eq!(profile.tag.as_deref(), Some("C0G20PR2"));
    assert_eq!(profile.clan_name(), "Reddit Delta");
    assert_eq!(profile.clan_role(), "Leader");
    assert!(!profile.not_in_clan());
    assert_eq!(profile.trophies, Some(4223));
    assert_eq!(profile.arena.name.as_deref(), Some("Hog Mountain"));
    assert_eq!(profile.deck.cards.len(), 2);
    assert_eq!(profile.chests_opened(), Some(1222));
  }

  #[test]
  fn test_missing_clan_falls_back_to_defaults() {
    let profile = Profile::new(json!({"tag": "2PP", "name": "Loner"}), None);
    assert_eq!(profile.clan.name, "No Clan");
    assert_eq!(profile.clan.role, "N/A");
    assert_eq!(profile.clan.tag, None);
    assert!(profile.not_in_clan());
    assert_eq!(profile.badge.url, crate::core::NO_CLAN_BADGE_URL);
  }

  #[test]
  fn test_win_streak_floored_at_zero() {
    let profile = Profile::new(fixture(), None);
    assert_eq!(profile.games.win_streak, 0);

    let winning = Profile::new(json!({"games": {"currentWinStreak": 7}}), None);
    assert_eq!(winning.games.win_streak, 7);
  }

  #[test]
  fn test_xp_display() {
    let profile = Profile::new(fixture(), None);
    assert_eq!(profile.experience.xp_display(), "52,841 / 88,000");

    let maxed = Profile::new(json!({"experience": {"level": 13, "xp": 0}}), None);
    assert_eq!(maxed.experience.xp_display(), "MAX / MAX");
  }

  #[test]
  fn test_equality_is_identity_based() {
    let url = "http://api/player/C0G20PR2".to_string();
    let a = Profile::new(fixture(), Some(url.clone()));
    let b = Profile::new(fixture(), Some(url));
    let c = Profile::new(fixture(), Some("http://api/player/PY9VC98C".to_string()));
    assert_eq!(a, b);
    assert_ne!(a, c);
  }

  #[test]
  fn test_payload_round_trip() {
    let payload = fixture();
    let profile = Profile::new(payload.clone(), None);
    assert_eq!(profile.as_payload(), &payload);
  }

  #[test]
  fn test_undeclared_field_passthrough() {
    let profile = Profile::new(json!({"tag": "2PP", "previousSeasons": []}), None);
    assert_eq!(profile.get("previousSeasons").unwrap(), &json!([]));
    assert!(profile.get("nonexistent").is_err());
  }

  #[test]
  fn test_group_digits() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1000), "1,000");
    assert_eq!(group_digits(52841), "52,841");
    assert_eq!(group_digits(-1234567), "-1,234,567");
  }
}
