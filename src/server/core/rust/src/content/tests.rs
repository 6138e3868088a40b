/* src/server/core/rust/src/content/tests.rs */

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::*;
use crate::model::Section;
use crate::testing::{MemoryCms, page, work_item};

fn fetcher(cms: Arc<MemoryCms>) -> ContentFetcher {
  ContentFetcher::new(
    cms,
    LocaleConfig::default(),
    PlaceholderSection::default(),
    Duration::from_secs(60),
  )
}

fn work_section(block: serde_json::Value) -> Section {
  Section {
    id: Some(1),
    identifier: None,
    title: None,
    hide_title: None,
    spacing_top: None,
    spacing_bottom: None,
    blocks: vec![Block::from_value(block)],
  }
}

#[tokio::test]
async fn serves_requested_locale() {
  let cms = Arc::new(MemoryCms::new().with_page(page("home", "en", "Home")));
  let fetched = fetcher(cms).fetch_page("home", "en", PublicationMode::Live).await;
  assert_eq!(fetched.source, ContentSource::Requested);
  assert_eq!(fetched.page.title.plain_text(), "Home");
}

#[tokio::test]
async fn falls_back_to_default_locale() {
  let cms = Arc::new(MemoryCms::new().with_page(page("about", "fr", "A propos")));
  let fetched = fetcher(cms).fetch_page("about", "en", PublicationMode::Live).await;
  assert_eq!(fetched.source, ContentSource::DefaultLocale);
  assert_eq!(fetched.served_locale(), Some("fr"));
}

#[tokio::test]
async fn placeholder_when_no_locale_has_content() {
  let cms = Arc::new(MemoryCms::new());
  let fetched = fetcher(cms.clone()).fetch_page("home", "en", PublicationMode::Live).await;
  assert_eq!(fetched.source, ContentSource::Placeholder);
  assert_eq!(fetched.page.title.plain_text(), "Bienvenue");
  assert_eq!(fetched.page.seo_title.as_deref(), Some("Accueil"));
  assert_eq!(fetched.page.locale.as_deref(), Some("en"));
  assert!(fetched.page.sections.is_empty());
  // requested locale, then default
  assert_eq!(cms.page_calls(), 2);
}

#[tokio::test]
async fn default_locale_is_not_queried_twice() {
  let cms = Arc::new(MemoryCms::new());
  let fetched = fetcher(cms.clone()).fetch_page("home", "fr", PublicationMode::Live).await;
  assert_eq!(fetched.source, ContentSource::Placeholder);
  assert_eq!(cms.page_calls(), 1);
}

#[tokio::test]
async fn cms_failure_degrades_to_placeholder() {
  let cms = Arc::new(MemoryCms::new().failing());
  let fetched = fetcher(cms).fetch_page("home", "en", PublicationMode::Live).await;
  assert_eq!(fetched.source, ContentSource::Placeholder);
}

#[tokio::test]
async fn live_reads_are_cached() {
  let cms = Arc::new(MemoryCms::new().with_page(page("home", "fr", "Accueil")));
  let fetcher = fetcher(cms.clone());
  fetcher.fetch_page("home", "fr", PublicationMode::Live).await;
  fetcher.fetch_page("home", "fr", PublicationMode::Live).await;
  assert_eq!(cms.page_calls(), 1);
}

#[tokio::test]
async fn unknown_slugs_do_not_grow_cache_past_capacity() {
  let cms = Arc::new(MemoryCms::new());
  let fetcher = fetcher(cms).with_cache_capacity(64);
  for i in 0..1000 {
    fetcher.fetch_page(&format!("junk-{i}"), "fr", PublicationMode::Live).await;
  }
  assert_eq!(fetcher.cached_pages().await, 64);
}

#[tokio::test]
async fn default_cache_is_bounded() {
  let fetcher = fetcher(Arc::new(MemoryCms::new()));
  for i in 0..(crate::cache::DEFAULT_CAPACITY + 100) {
    fetcher.fetch_page(&format!("junk-{i}"), "fr", PublicationMode::Live).await;
  }
  assert_eq!(fetcher.cached_pages().await, crate::cache::DEFAULT_CAPACITY);
}

#[tokio::test]
async fn drafts_bypass_cache() {
  let cms = Arc::new(
    MemoryCms::new()
      .with_page(page("home", "fr", "Publié"))
      .with_draft(page("home", "fr", "Brouillon")),
  );
  let fetcher = fetcher(cms.clone());
  let live = fetcher.fetch_page("home", "fr", PublicationMode::Live).await;
  let draft = fetcher.fetch_page("home", "fr", PublicationMode::Draft).await;
  let again = fetcher.fetch_page("home", "fr", PublicationMode::Draft).await;
  assert_eq!(live.page.title.plain_text(), "Publié");
  assert_eq!(draft.page.title.plain_text(), "Brouillon");
  assert_eq!(again.page.title.plain_text(), "Brouillon");
  assert_eq!(cms.page_calls(), 3);
}

#[tokio::test]
async fn custom_placeholder_text() {
  let placeholder = PlaceholderSection {
    title: "Welcome".into(),
    seo_title: "Home".into(),
    seo_description: "Home page".into(),
  };
  let fetcher = ContentFetcher::new(
    Arc::new(MemoryCms::new()),
    LocaleConfig::default(),
    placeholder,
    Duration::from_secs(60),
  );
  let fetched = fetcher.fetch_page("home", "fr", PublicationMode::Live).await;
  assert_eq!(fetched.page.title.plain_text(), "Welcome");
}

#[tokio::test]
async fn work_blocks_are_hydrated() {
  let mut home = page("home", "fr", "Accueil");
  home.sections.push(work_section(json!({
    "__component": "blocks.work-block",
    "showAllCategories": false,
    "filterByCategories": [{ "id": 2, "name": "Web", "slug": "web" }],
    "limit": 5
  })));
  let cms = Arc::new(
    MemoryCms::new()
      .with_page(home)
      .with_work_item(work_item(1, "Brand", &[(1, "branding")]))
      .with_work_item(work_item(2, "Site", &[(2, "web")])),
  );

  let fetched = fetcher(cms.clone()).fetch_page("home", "fr", PublicationMode::Live).await;
  let Some(Block::Work(work)) = fetched.page.first_block() else { panic!("expected work block") };
  assert_eq!(work.work_items.len(), 1);
  assert_eq!(work.work_items[0].title, "Site");

  let queries = cms.work_queries.lock().unwrap();
  assert_eq!(queries[0].category_ids, vec![2]);
  assert_eq!(queries[0].limit, 5);
  assert_eq!(queries[0].locale.as_deref(), Some("fr"));
}

#[tokio::test]
async fn show_all_categories_ignores_filter_list() {
  let cms = Arc::new(MemoryCms::new());
  let fetcher = fetcher(cms.clone());
  let Block::Work(block) = Block::from_value(json!({
    "__component": "blocks.work-block",
    "filterByCategories": [{ "id": 2, "name": "Web", "slug": "web" }],
    "showFeaturedOnly": true
  })) else {
    panic!("expected work block");
  };
  fetcher.fetch_work_items(&block, "en", PublicationMode::Live).await;
  let queries = cms.work_queries.lock().unwrap();
  assert!(queries[0].category_ids.is_empty());
  assert!(queries[0].featured_only);
  assert_eq!(queries[0].limit, 12);
}

#[tokio::test]
async fn work_item_failure_is_empty() {
  let fetcher = fetcher(Arc::new(MemoryCms::new().failing()));
  let Block::Work(block) = Block::from_value(json!({ "__component": "blocks.work-block" })) else {
    panic!("expected work block");
  };
  assert!(fetcher.fetch_work_items(&block, "fr", PublicationMode::Live).await.is_empty());
}
