/* src/server/core/rust/src/contact.rs */

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::SiteError;
use crate::model::de::{flag, null_default};

const MAX_NAME: usize = 200;
const MAX_EMAIL: usize = 320;
const MAX_MESSAGE: usize = 5000;

fn email_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// A contact form post, as sent by the rendered form or a JSON client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
  #[serde(default, deserialize_with = "null_default")]
  pub name: String,
  #[serde(default, deserialize_with = "null_default")]
  pub email: String,
  #[serde(default, deserialize_with = "null_default")]
  pub message: String,
  #[serde(default, deserialize_with = "flag")]
  pub consent: bool,
  /// Honeypot. Hidden from visitors, so only bots fill it in.
  #[serde(default, deserialize_with = "null_default")]
  pub website: String,
  #[serde(default)]
  pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload<'a> {
  pub name: &'a str,
  pub email: &'a str,
  pub message: &'a str,
  pub consent: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locale: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
  /// Valid, trimmed submission ready to forward.
  Accepted(ContactSubmission),
  /// Honeypot was filled; answer as if it succeeded and drop it.
  Discarded,
}

impl ContactSubmission {
  pub fn validate(self) -> Result<ContactOutcome, SiteError> {
    if !self.website.trim().is_empty() {
      return Ok(ContactOutcome::Discarded);
    }

    let name = self.name.trim().to_string();
    let email = self.email.trim().to_string();
    let message = self.message.trim().to_string();

    if name.is_empty() || email.is_empty() || message.is_empty() {
      return Err(SiteError::validation("name, email and message are required"));
    }
    if name.chars().count() > MAX_NAME {
      return Err(SiteError::validation(format!("name exceeds {MAX_NAME} characters")));
    }
    if email.chars().count() > MAX_EMAIL || !email_re().is_match(&email) {
      return Err(SiteError::validation("invalid email address"));
    }
    if message.chars().count() > MAX_MESSAGE {
      return Err(SiteError::validation(format!("message exceeds {MAX_MESSAGE} characters")));
    }
    if !self.consent {
      return Err(SiteError::validation("consent is required"));
    }

    let locale = self.locale.map(|l| l.trim().to_string()).filter(|l| !l.is_empty());
    Ok(ContactOutcome::Accepted(ContactSubmission {
      name,
      email,
      message,
      consent: true,
      website: String::new(),
      locale,
    }))
  }

  /// Body forwarded to the CMS, without the honeypot.
  pub fn payload(&self) -> ContactPayload<'_> {
    ContactPayload {
      name: &self.name,
      email: &self.email,
      message: &self.message,
      consent: self.consent,
      locale: self.locale.as_deref(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid() -> ContactSubmission {
    ContactSubmission {
      name: "  Ada ".into(),
      email: "ada@example.com".into(),
      message: "Bonjour".into(),
      consent: true,
      website: String::new(),
      locale: Some("fr".into()),
    }
  }

  #[test]
  fn accepts_and_trims() {
    let ContactOutcome::Accepted(sub) = valid().validate().unwrap() else {
      panic!("expected accepted");
    };
    assert_eq!(sub.name, "Ada");
    assert_eq!(sub.locale.as_deref(), Some("fr"));
  }

  #[test]
  fn honeypot_is_discarded() {
    let sub = ContactSubmission { website: "http://spam.test".into(), consent: false, ..valid() };
    assert_eq!(sub.validate().unwrap(), ContactOutcome::Discarded);
  }

  #[test]
  fn rejects_missing_consent() {
    let err = ContactSubmission { consent: false, ..valid() }.validate().unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.status(), 400);
  }

  #[test]
  fn rejects_malformed_email() {
    for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
      let sub = ContactSubmission { email: email.into(), ..valid() };
      assert!(sub.validate().is_err(), "{email} should be rejected");
    }
  }

  #[test]
  fn rejects_blank_fields() {
    assert!(ContactSubmission { name: "   ".into(), ..valid() }.validate().is_err());
    assert!(ContactSubmission { message: String::new(), ..valid() }.validate().is_err());
  }

  #[test]
  fn rejects_oversized_message() {
    let sub = ContactSubmission { message: "x".repeat(MAX_MESSAGE + 1), ..valid() };
    assert!(sub.validate().is_err());
  }

  #[test]
  fn payload_omits_honeypot() {
    let value = serde_json::to_value(valid().payload()).unwrap();
    assert!(value.get("website").is_none());
    assert_eq!(value["consent"], true);
  }

  #[test]
  fn decodes_json_body() {
    let sub: ContactSubmission = serde_json::from_str(
      r#"{"name":"A","email":"a@b.co","message":"m","consent":true,"website":"","locale":"en"}"#,
    )
    .unwrap();
    assert!(sub.consent);
    assert_eq!(sub.locale.as_deref(), Some("en"));
  }
}
