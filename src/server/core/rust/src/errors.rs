/* src/server/core/rust/src/errors.rs */

/// Error surfaced to HTTP clients: a stable code, a human message and the
/// status it maps to.
#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "UNAUTHORIZED" => 401,
    "NOT_FOUND" => 404,
    "PAYLOAD_TOO_LARGE" => 413,
    "UPSTREAM_ERROR" => 502,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn unauthorized(msg: impl Into<String>) -> Self {
    Self::with_code("UNAUTHORIZED", msg)
  }

  pub fn upstream(msg: impl Into<String>) -> Self {
    Self::with_code("UPSTREAM_ERROR", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  /// Whether retrying the same request may succeed.
  pub fn is_transient(&self) -> bool {
    self.code == "UPSTREAM_ERROR"
  }
}

impl From<crate::cms::CmsError> for SiteError {
  fn from(err: crate::cms::CmsError) -> Self {
    Self::upstream(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("UNAUTHORIZED"), 401);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("PAYLOAD_TOO_LARGE"), 413);
    assert_eq!(default_status("UPSTREAM_ERROR"), 502);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn new_explicit_status() {
    let err = SiteError::new("CONSENT_REQUIRED", "consent missing", 422);
    assert_eq!(err.code(), "CONSENT_REQUIRED");
    assert_eq!(err.message(), "consent missing");
    assert_eq!(err.status(), 422);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(SiteError::validation("x").status(), 400);
    assert_eq!(SiteError::not_found("x").status(), 404);
    assert_eq!(SiteError::unauthorized("x").status(), 401);
    assert_eq!(SiteError::upstream("x").status(), 502);
    assert_eq!(SiteError::internal("x").status(), 500);
  }

  #[test]
  fn cms_error_maps_to_upstream() {
    let err: SiteError = crate::cms::CmsError::Status { status: 503, path: "/api/pages".into() }.into();
    assert_eq!(err.code(), "UPSTREAM_ERROR");
    assert!(err.message().contains("503"));
    assert!(err.is_transient());
    assert!(!SiteError::validation("x").is_transient());
  }

  #[test]
  fn display_format() {
    let err = SiteError::not_found("missing");
    assert_eq!(err.to_string(), "NOT_FOUND: missing");
  }
}
