/* src/server/core/rust/src/content.rs */

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::RevalidateCache;
use crate::cms::{CmsClient, PageQuery, PublicationMode, WorkQuery};
use crate::config::PlaceholderSection;
use crate::locale::LocaleConfig;
use crate::model::{Block, Page, TextValue, WorkBlock, WorkItem};

/// Which step of the fallback chain produced a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
  Requested,
  DefaultLocale,
  Placeholder,
}

impl ContentSource {
  pub fn as_str(self) -> &'static str {
    match self {
      ContentSource::Requested => "requested",
      ContentSource::DefaultLocale => "default-locale",
      ContentSource::Placeholder => "placeholder",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
  pub page: Page,
  pub source: ContentSource,
}

impl FetchedPage {
  /// Locale the content was actually served in.
  pub fn served_locale(&self) -> Option<&str> {
    self.page.locale.as_deref()
  }
}

/// Loads pages from the CMS with locale fallback, so a render always has a
/// page to work with.
pub struct ContentFetcher {
  cms: Arc<dyn CmsClient>,
  locales: LocaleConfig,
  placeholder: PlaceholderSection,
  cache: RevalidateCache<(String, String), FetchedPage>,
}

impl ContentFetcher {
  pub fn new(
    cms: Arc<dyn CmsClient>,
    locales: LocaleConfig,
    placeholder: PlaceholderSection,
    revalidate: Duration,
  ) -> Self {
    Self { cms, locales, placeholder, cache: RevalidateCache::new(revalidate) }
  }

  /// Bound the number of cached (slug, locale) pages.
  #[must_use]
  pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
    self.cache = RevalidateCache::with_capacity(self.cache.ttl(), capacity);
    self
  }

  pub async fn cached_pages(&self) -> usize {
    self.cache.len().await
  }

  pub fn locales(&self) -> &LocaleConfig {
    &self.locales
  }

  /// Page `slug` in `locale`, else in the default locale, else the
  /// placeholder. Work blocks come back hydrated. Live reads are cached for
  /// the revalidation window; drafts always hit the CMS.
  pub async fn fetch_page(&self, slug: &str, locale: &str, mode: PublicationMode) -> FetchedPage {
    let key = (slug.to_string(), locale.to_string());
    if !mode.is_draft()
      && let Some(hit) = self.cache.get(&key).await
    {
      debug!(slug, locale, "page cache hit");
      return hit;
    }

    let mut fetched = self.fetch_uncached(slug, locale, mode).await;
    let served = fetched.page.locale.clone().unwrap_or_else(|| locale.to_string());
    self.hydrate_work_blocks(&mut fetched.page, &served, mode).await;

    if !mode.is_draft() {
      self.cache.insert(key, fetched.clone()).await;
    }
    fetched
  }

  async fn fetch_uncached(&self, slug: &str, locale: &str, mode: PublicationMode) -> FetchedPage {
    if let Some(page) = self.query_first(slug, locale, mode).await {
      return FetchedPage { page, source: ContentSource::Requested };
    }

    let default = self.locales.default.as_str();
    if locale != default
      && let Some(page) = self.query_first(slug, default, mode).await
    {
      info!(slug, requested = locale, served = default, "page served from default locale");
      return FetchedPage { page, source: ContentSource::DefaultLocale };
    }

    info!(slug, locale, "no content in any locale, serving placeholder");
    FetchedPage { page: self.placeholder_page(slug, locale), source: ContentSource::Placeholder }
  }

  async fn query_first(&self, slug: &str, locale: &str, mode: PublicationMode) -> Option<Page> {
    let query = PageQuery::new(slug, locale, mode);
    match self.cms.find_pages(&query).await {
      Ok(pages) => pages.into_iter().next(),
      Err(error) => {
        warn!(slug, locale, %error, "page query failed");
        None
      }
    }
  }

  pub fn placeholder_page(&self, slug: &str, locale: &str) -> Page {
    Page {
      id: None,
      document_id: Some(format!("fallback-{slug}")),
      slug: slug.to_string(),
      locale: Some(locale.to_string()),
      title: TextValue::Plain(self.placeholder.title.clone()),
      hide_title: Some(false),
      seo_title: Some(self.placeholder.seo_title.clone()),
      seo_description: Some(TextValue::Plain(self.placeholder.seo_description.clone())),
      seo_image: None,
      no_index: Some(false),
      sections: Vec::new(),
      localizations: Vec::new(),
    }
  }

  /// Work items for a work block. Failures render as an empty list.
  pub async fn fetch_work_items(
    &self,
    block: &WorkBlock,
    locale: &str,
    mode: PublicationMode,
  ) -> Vec<WorkItem> {
    let category_ids = if block.show_all_categories() {
      Vec::new()
    } else {
      block.filter_by_categories.iter().map(|c| c.id).collect()
    };
    let query = WorkQuery {
      locale: Some(locale.to_string()),
      limit: block.limit(),
      featured_only: block.show_featured_only(),
      category_ids,
      mode,
    };
    match self.cms.find_work_items(&query).await {
      Ok(items) => items,
      Err(error) => {
        warn!(locale, %error, "work item query failed");
        Vec::new()
      }
    }
  }

  /// Replace the items of every work block with a fresh query result.
  pub async fn hydrate_work_blocks(&self, page: &mut Page, locale: &str, mode: PublicationMode) {
    for block in page.blocks_mut() {
      if let Block::Work(work) = block {
        work.work_items = self.fetch_work_items(work, locale, mode).await;
      }
    }
  }
}

#[cfg(test)]
mod tests;
