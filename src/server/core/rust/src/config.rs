/* src/server/core/rust/src/config.rs */

use serde::Deserialize;

use crate::locale::LocaleConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("i18n.locales must not be empty")]
  NoLocales,

  #[error("i18n.default \"{default}\" is not in i18n.locales {locales:?}")]
  DefaultNotListed { default: String, locales: Vec<String> },

  #[error("cms.url must start with http:// or https:// [{0}]")]
  CmsScheme(String),

  #[error("server.revalidate_secs must be greater than zero")]
  ZeroRevalidate,
}

/// Full site configuration, usually read from `vitrine.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub cms: CmsConfig,
  #[serde(default)]
  pub i18n: LocaleConfig,
  #[serde(default)]
  pub draft: DraftSection,
  #[serde(default)]
  pub placeholder: PlaceholderSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_site_name")]
  pub name: String,
  /// Public origin of the site, used for canonical and hreflang links.
  #[serde(default = "default_site_url")]
  pub url: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { name: default_site_name(), url: default_site_url() }
  }
}

fn default_site_name() -> String {
  "Vitrine".to_string()
}

fn default_site_url() -> String {
  "http://localhost:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_revalidate")]
  pub revalidate_secs: u64,
  /// Upper bound on cached (slug, locale) pages.
  #[serde(default = "default_cache_capacity")]
  pub cache_capacity: usize,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      revalidate_secs: default_revalidate(),
      cache_capacity: default_cache_capacity(),
    }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_revalidate() -> u64 {
  60
}

fn default_cache_capacity() -> usize {
  crate::cache::DEFAULT_CAPACITY
}

#[derive(Clone, Deserialize, derive_more::Debug)]
pub struct CmsConfig {
  #[serde(default = "default_cms_url")]
  pub url: String,
  /// Origin used for media URLs in rendered pages. Defaults to `url`.
  #[serde(default)]
  pub public_url: Option<String>,
  #[serde(default)]
  #[debug("\"<redacted>\"")]
  pub api_token: Option<String>,
  #[serde(default)]
  #[debug("\"<redacted>\"")]
  pub preview_token: Option<String>,
  #[serde(default = "default_timeout")]
  pub timeout_secs: u64,
}

impl Default for CmsConfig {
  fn default() -> Self {
    Self {
      url: default_cms_url(),
      public_url: None,
      api_token: None,
      preview_token: None,
      timeout_secs: default_timeout(),
    }
  }
}

impl CmsConfig {
  pub fn media_base(&self) -> &str {
    self.public_url.as_deref().unwrap_or(&self.url)
  }
}

fn default_cms_url() -> String {
  "http://localhost:1337".to_string()
}

fn default_timeout() -> u64 {
  10
}

#[derive(Clone, Default, Deserialize, derive_more::Debug)]
pub struct DraftSection {
  /// Shared secret required to switch a browser into draft mode.
  #[serde(default)]
  #[debug("\"<redacted>\"")]
  pub secret: Option<String>,
}

/// Content substituted when a page exists in no locale.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderSection {
  #[serde(default = "default_placeholder_title")]
  pub title: String,
  #[serde(default = "default_placeholder_seo_title")]
  pub seo_title: String,
  #[serde(default = "default_placeholder_seo_description")]
  pub seo_description: String,
}

impl Default for PlaceholderSection {
  fn default() -> Self {
    Self {
      title: default_placeholder_title(),
      seo_title: default_placeholder_seo_title(),
      seo_description: default_placeholder_seo_description(),
    }
  }
}

fn default_placeholder_title() -> String {
  "Bienvenue".to_string()
}

fn default_placeholder_seo_title() -> String {
  "Accueil".to_string()
}

fn default_placeholder_seo_description() -> String {
  "Page d'accueil".to_string()
}

impl SiteConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.i18n.validate()?;
    if !(self.cms.url.starts_with("http://") || self.cms.url.starts_with("https://")) {
      return Err(ConfigError::CmsScheme(self.cms.url.clone()));
    }
    if self.server.revalidate_secs == 0 {
      return Err(ConfigError::ZeroRevalidate);
    }
    Ok(())
  }

  /// Overlay environment variables on top of file values. `lookup` is
  /// usually `|k| std::env::var(k).ok()`.
  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty("VITRINE_CMS_URL") {
      self.cms.url = url;
    }
    if let Some(url) = non_empty("VITRINE_CMS_PUBLIC_URL") {
      self.cms.public_url = Some(url);
    }
    if let Some(token) = non_empty("VITRINE_CMS_TOKEN") {
      self.cms.api_token = Some(token);
    }
    if let Some(token) = non_empty("VITRINE_CMS_PREVIEW_TOKEN") {
      self.cms.preview_token = Some(token);
    }
    if let Some(secret) = non_empty("VITRINE_DRAFT_SECRET") {
      self.draft.secret = Some(secret);
    }
    if let Some(url) = non_empty("VITRINE_SITE_URL") {
      self.site.url = url;
    }
    if let Some(port) = non_empty("PORT").and_then(|p| p.parse().ok()) {
      self.server.port = port;
    }
  }
}
