//! SuperCell tag normalization and validation

use crate::error::{Error, Result};

/// The 14-character alphabet used by SuperCell player and clan tags
pub const TAG_CHARACTERS: &str = "0289PYLQGRJCUV";

/// A normalized player or clan tag.
///
/// Construction never fails; validity is a separate query so callers decide
/// whether to reject a tag before issuing a network call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
  /// Normalize raw user input into the canonical tag form.
  ///
  /// Strips leading `#`, maps the letter `O` (either case) to the digit `0`,
  /// and uppercases the remainder. Normalization is idempotent: normalizing
  /// an already-normalized tag yields the same tag.
  pub fn new(raw: &str) -> Self {
    let stripped = raw.trim_start_matches('#');
    // O is mapped before uppercasing so a lowercase o cannot survive one
    // pass as an uppercase O.
    let tag: String = stripped.replace(['O', 'o'], "0").to_uppercase();
    Tag(tag)
  }

  /// The normalized tag as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// True iff every character belongs to [`TAG_CHARACTERS`].
  ///
  /// The empty tag is vacuously valid here; the client rejects empty tags
  /// separately before building a URL.
  pub fn is_valid(&self) -> bool {
    self.0.chars().all(|c| TAG_CHARACTERS.contains(c))
  }

  /// Characters outside the tag alphabet, in first-seen order.
  ///
  /// Duplicates are kept: `"!!"` reports two offenders.
  pub fn invalid_chars(&self) -> Vec<char> {
    self.0.chars().filter(|c| !TAG_CHARACTERS.contains(*c)).collect()
  }

  /// Consume the tag, returning it if valid or an [`Error::InvalidTag`]
  /// carrying the offending characters.
  pub fn validated(self) -> Result<Self> {
    if self.is_valid() {
      Ok(self)
    } else {
      let invalid_chars = self.invalid_chars();
      Err(Error::InvalidTag { tag: self.0, invalid_chars })
    }
  }
}

impl std::fmt::Display for Tag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<Tag> for String {
  fn from(tag: Tag) -> Self {
    tag.0
  }
}
