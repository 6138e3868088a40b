/* src/server/core/rust/src/locale/mod.rs */

mod negotiate;
mod supported;

pub use negotiate::{
  LOCALE_COOKIE, ResolveData, ResolveStrategy, default_strategies, from_accept_language,
  from_cookie, from_url_prefix, read_cookie, resolve_chain,
};
pub use supported::SupportedLocales;

use serde::Deserialize;

use crate::config::ConfigError;

/// The configured locales and the designated default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleConfig {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
}

impl Default for LocaleConfig {
  fn default() -> Self {
    Self { locales: default_locales(), default: default_locale() }
  }
}

fn default_locales() -> Vec<String> {
  vec!["fr".to_string(), "en".to_string()]
}

fn default_locale() -> String {
  "fr".to_string()
}

impl LocaleConfig {
  pub fn new(locales: Vec<String>, default: impl Into<String>) -> Result<Self, ConfigError> {
    let config = Self { locales, default: default.into() };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.locales.is_empty() {
      return Err(ConfigError::NoLocales);
    }
    if !self.is_supported(&self.default) {
      return Err(ConfigError::DefaultNotListed {
        default: self.default.clone(),
        locales: self.locales.clone(),
      });
    }
    Ok(())
  }

  pub fn is_supported(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  /// The requested locale when supported, otherwise the default. Never fails.
  pub fn resolve(&self, requested: Option<&str>) -> String {
    match requested.map(str::trim) {
      Some(locale) if self.is_supported(locale) => locale.to_string(),
      _ => self.default.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> LocaleConfig {
    LocaleConfig::new(vec!["fr".into(), "en".into(), "de".into()], "fr").unwrap()
  }

  #[test]
  fn supported_locale_is_kept() {
    assert_eq!(config().resolve(Some("en")), "en");
    assert_eq!(config().resolve(Some(" de ")), "de");
  }

  #[test]
  fn unsupported_locales_fall_back_to_default() {
    let config = config();
    for requested in [Some("es"), Some(""), Some("EN"), Some("en-US"), Some("../etc"), None] {
      assert_eq!(config.resolve(requested), "fr", "{requested:?}");
    }
  }

  #[test]
  fn default_must_be_listed() {
    let err = LocaleConfig::new(vec!["en".into()], "fr").unwrap_err();
    assert!(matches!(err, ConfigError::DefaultNotListed { .. }));
    assert_eq!(LocaleConfig::new(vec![], "fr").unwrap_err(), ConfigError::NoLocales);
  }
}
