/* src/server/core/rust/src/model/de.rs */

// The CMS sends explicit `null` for unset attributes, which `#[serde(default)]`
// alone does not cover.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional enum values: anything the enum does not know decodes as `None`
/// instead of failing the surrounding page.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
    return Ok(None);
  };
  match T::deserialize(&value) {
    Ok(parsed) => Ok(Some(parsed)),
    Err(error) => {
      debug!(%value, %error, "ignoring unexpected option value");
      Ok(None)
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
  Str(String),
  Int(i64),
  Float(f64),
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
    StringOrNumber::Str(s) => s,
    StringOrNumber::Int(n) => n.to_string(),
    StringOrNumber::Float(n) => n.to_string(),
  }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
  Bool(bool),
  Text(String),
}

/// Checkbox values: JSON booleans, or the strings an HTML form posts.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<Flag>::deserialize(deserializer)? {
    Some(Flag::Bool(b)) => b,
    Some(Flag::Text(s)) => matches!(s.trim(), "on" | "true" | "1" | "yes"),
    None => false,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize)]
  struct Probe {
    #[serde(default, deserialize_with = "null_default")]
    flags: Vec<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    year: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    consent: bool,
    #[serde(default, deserialize_with = "lenient")]
    side: Option<Side>,
  }

  #[derive(Debug, PartialEq, Deserialize)]
  #[serde(rename_all = "lowercase")]
  enum Side {
    Left,
    Right,
  }

  #[test]
  fn lenient_enum_drops_unknown_values() {
    let p: Probe = serde_json::from_str(r#"{"side":"left"}"#).unwrap();
    assert_eq!(p.side, Some(Side::Left));
    let p: Probe = serde_json::from_str(r#"{"side":"diagonal"}"#).unwrap();
    assert_eq!(p.side, None);
    let p: Probe = serde_json::from_str(r#"{"side":42}"#).unwrap();
    assert_eq!(p.side, None);
    let p: Probe = serde_json::from_str(r#"{"side":null}"#).unwrap();
    assert_eq!(p.side, None);
  }

  #[test]
  fn null_becomes_default() {
    let p: Probe = serde_json::from_str(r#"{"flags":null}"#).unwrap();
    assert!(p.flags.is_empty());
    assert!(p.year.is_none());
  }

  #[test]
  fn year_accepts_numbers_and_strings() {
    let p: Probe = serde_json::from_str(r#"{"year":2024}"#).unwrap();
    assert_eq!(p.year.as_deref(), Some("2024"));
    let p: Probe = serde_json::from_str(r#"{"year":"2019-2021"}"#).unwrap();
    assert_eq!(p.year.as_deref(), Some("2019-2021"));
  }

  #[test]
  fn flags_accept_form_values() {
    let p: Probe = serde_json::from_str(r#"{"consent":"on"}"#).unwrap();
    assert!(p.consent);
    let p: Probe = serde_json::from_str(r#"{"consent":true}"#).unwrap();
    assert!(p.consent);
    let p: Probe = serde_json::from_str(r#"{"consent":"false"}"#).unwrap();
    assert!(!p.consent);
    let p: Probe = serde_json::from_str("{}").unwrap();
    assert!(!p.consent);
  }
}
