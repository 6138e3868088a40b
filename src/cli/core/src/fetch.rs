/* src/cli/core/src/fetch.rs */

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use vitrine_server::{
  ContentFetcher, ContentSource, PublicationMode, SiteConfig, StrapiClient, SupportedLocales,
};

use crate::ui;

fn cms(config: &SiteConfig) -> Result<Arc<StrapiClient>> {
  let client = StrapiClient::new(&config.cms).context("failed to create CMS client")?;
  Ok(Arc::new(client))
}

/// Fetch one page through the same fallback chain the server uses and print it.
pub async fn run_fetch(
  config: &SiteConfig,
  slug: &str,
  locale: Option<&str>,
  draft: bool,
) -> Result<()> {
  let locale = config.i18n.resolve(locale);
  let fetcher = ContentFetcher::new(
    cms(config)?,
    config.i18n.clone(),
    config.placeholder.clone(),
    Duration::from_secs(config.server.revalidate_secs),
  );
  let mode = PublicationMode::from_draft(draft);
  let fetched = fetcher.fetch_page(slug, &locale, mode).await;

  ui::arrow(&format!("{slug} [{locale}, {}]", mode.as_str()));
  ui::kv("source", fetched.source.as_str());
  ui::kv("served in", fetched.served_locale().unwrap_or(&locale));
  if fetched.source == ContentSource::Placeholder {
    ui::warn("no content in any locale, placeholder shown");
  }

  let json = serde_json::to_string_pretty(&fetched.page).context("failed to encode page")?;
  ui::raw(&json);
  Ok(())
}

pub async fn run_locales(config: &SiteConfig) -> Result<()> {
  let supported = SupportedLocales::new(config.i18n.clone(), cms(config)?);
  let locales = supported.list().await;
  ui::arrow(&format!("{} supported locales", locales.len()));
  for code in &locales {
    if *code == config.i18n.default {
      ui::detail_ok(&format!("{code} (default)"));
    } else {
      ui::detail(code);
    }
  }
  Ok(())
}
