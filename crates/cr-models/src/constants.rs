//! Game constants model.

use crate::base::ModelData;
use cr_core::Result;
use serde_json::Value;

/// Opaque wrapper over the `/constants` payload.
///
/// Declares no fields; every access goes through the raw passthrough.
#[derive(Debug, Clone)]
pub struct Constants {
  data: ModelData,
}

impl Constants {
  /// Wrap a constants payload.
  pub fn new(payload: Value, identity: Option<String>) -> Self {
    Self { data: ModelData::new(payload, identity) }
  }

  /// Raw access to a payload field.
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

/// Constants compare by identity token, never by payload content.
impl PartialEq for Constants {
  fn eq(&self, other: &Self) -> bool {
    self.data.identity() == other.data.identity()
  }
}
