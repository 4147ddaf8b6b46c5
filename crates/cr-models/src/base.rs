//! Model base shared by all entity models.
//!
//! An entity owns a [`ModelData`]: the raw JSON payload it was built from
//! plus an optional identity token. Declared fields are pulled out of the
//! payload once, eagerly, at construction via the extraction helpers below;
//! anything the entity did not declare stays reachable through
//! [`ModelData::get`], which is a plain passthrough into the stored payload,
//! not deferred computation.

use cr_core::{Error, Result};
use serde_json::Value;

/// Backing storage for an entity model.
#[derive(Debug, Clone)]
pub struct ModelData {
  payload: Value,
  identity: Option<String>,
}

impl ModelData {
  /// Wrap a raw payload with an optional identity token.
  ///
  /// The identity is typically the URL the payload was fetched from; nested
  /// sub-models carry `None`.
  pub fn new(payload: Value, identity: Option<String>) -> Self {
    Self { payload, identity }
  }

  /// Raw access to an undeclared payload field.
  ///
  /// Fails with [`Error::MissingAttribute`] when the key is absent (or the
  /// payload is not an object) rather than returning a sentinel; asking for
  /// a key that exists nowhere is a programmer error, not a data condition.
  pub fn get(&self, key: &str) -> Result<&Value> {
    self
      .payload
      .get(key)
      .ok_or_else(|| Error::MissingAttribute(key.to_string()))
  }

  /// The original backing payload, unchanged.
  ///
  /// This is the exact JSON the model was constructed from, not a
  /// reconstruction from declared fields, so undeclared fields survive a
  /// round trip losslessly.
  pub fn as_payload(&self) -> &Value {
    &self.payload
  }

  /// Canonical JSON text of [`as_payload`](Self::as_payload).
  pub fn to_json_string(&self) -> Result<String> {
    Ok(serde_json::to_string(&self.payload)?)
  }

  /// Identity token used for model equality.
  pub fn identity(&self) -> Option<&str> {
    self.identity.as_deref()
  }
}

/// Declared string field, absent key yields `None`.
pub(crate) fn str_of(data: &Value, key: &str) -> Option<String> {
  data.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Declared string field with a default.
pub(crate) fn str_or(data: &Value, key: &str, default: &str) -> String {
  str_of(data, key).unwrap_or_else(|| default.to_string())
}

/// Declared integer field, absent key yields `None`.
pub(crate) fn i64_of(data: &Value, key: &str) -> Option<i64> {
  data.get(key).and_then(Value::as_i64)
}

/// Declared integer field with a default.
pub(crate) fn i64_or(data: &Value, key: &str, default: i64) -> i64 {
  i64_of(data, key).unwrap_or(default)
}

/// Declared boolean field, absent key yields `None`.
pub(crate) fn bool_of(data: &Value, key: &str) -> Option<bool> {
  data.get(key).and_then(Value::as_bool)
}

/// Nested sub-payload for composing a child model.
///
/// A missing fragment comes back as `Value::Null`, which child constructors
/// turn into their empty/default state.
pub(crate) fn fragment(data: &Value, key: &str) -> Value {
  data.get(key).cloned().unwrap_or(Value::Null)
}
