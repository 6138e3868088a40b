/* src/server/core/rust/src/locale/supported.rs */

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::LocaleConfig;
use crate::cms::CmsClient;

const LOCALES_TTL: Duration = Duration::from_secs(60 * 60);
/// How long the configured list stands in for the CMS after a failed fetch.
const FAILURE_TTL: Duration = Duration::from_secs(60);

struct CachedList {
  fetched_at: Instant,
  ttl: Duration,
  locales: Vec<String>,
}

/// Configured locales merged with the ones enabled in the CMS.
pub struct SupportedLocales {
  config: LocaleConfig,
  cms: Arc<dyn CmsClient>,
  ttl: Duration,
  cached: RwLock<Option<CachedList>>,
}

impl SupportedLocales {
  pub fn new(config: LocaleConfig, cms: Arc<dyn CmsClient>) -> Self {
    Self { config, cms, ttl: LOCALES_TTL, cached: RwLock::new(None) }
  }

  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = ttl;
    self
  }

  pub fn config(&self) -> &LocaleConfig {
    &self.config
  }

  /// Static locales first, then CMS-only ones, without duplicates. A CMS
  /// failure degrades to the static list, which is kept for a shorter window
  /// so an outage does not cost one CMS round trip per call.
  pub async fn list(&self) -> Vec<String> {
    if let Some(cached) = self.cached.read().await.as_ref()
      && cached.fetched_at.elapsed() < cached.ttl
    {
      return cached.locales.clone();
    }

    let (merged, ttl) = match self.cms.list_locales().await {
      Ok(remote) => {
        let mut merged = self.config.locales.clone();
        for code in remote {
          if !merged.contains(&code) {
            merged.push(code);
          }
        }
        debug!(locales = ?merged, "supported locales refreshed");
        (merged, self.ttl)
      }
      Err(error) => {
        warn!(%error, "cms locale list unavailable, using configured locales");
        (self.config.locales.clone(), self.ttl.min(FAILURE_TTL))
      }
    };

    *self.cached.write().await =
      Some(CachedList { fetched_at: Instant::now(), ttl, locales: merged.clone() });
    merged
  }

  pub async fn is_supported(&self, locale: &str) -> bool {
    self.config.is_supported(locale) || self.list().await.iter().any(|l| l == locale)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::Ordering;

  use super::*;
  use crate::testing::MemoryCms;

  #[tokio::test]
  async fn merges_static_and_cms_locales() {
    let cms = Arc::new(MemoryCms::new().with_locales(&["en", "de", "fr", "it"]));
    let supported = SupportedLocales::new(LocaleConfig::default(), cms);
    assert_eq!(supported.list().await, vec!["fr", "en", "de", "it"]);
    assert!(supported.is_supported("it").await);
    assert!(!supported.is_supported("es").await);
  }

  #[tokio::test]
  async fn cms_failure_yields_static_list() {
    let cms = Arc::new(MemoryCms::new().failing());
    let supported = SupportedLocales::new(LocaleConfig::default(), cms.clone());
    for _ in 0..5 {
      assert_eq!(supported.list().await, vec!["fr", "en"]);
    }
    assert_eq!(cms.locale_calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn failure_is_retried_after_short_window() {
    let cms = Arc::new(MemoryCms::new().failing());
    let supported =
      SupportedLocales::new(LocaleConfig::default(), cms.clone()).with_ttl(Duration::ZERO);
    supported.list().await;
    supported.list().await;
    assert_eq!(cms.locale_calls.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn list_is_cached() {
    let cms = Arc::new(MemoryCms::new().with_locales(&["de"]));
    let supported = SupportedLocales::new(LocaleConfig::default(), cms.clone());
    supported.list().await;
    supported.list().await;
    assert_eq!(cms.locale_calls.load(Ordering::SeqCst), 1);

    let supported = SupportedLocales::new(LocaleConfig::default(), cms.clone()).with_ttl(Duration::ZERO);
    supported.list().await;
    supported.list().await;
    assert_eq!(cms.locale_calls.load(Ordering::SeqCst), 3);
  }
}
