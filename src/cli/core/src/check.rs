/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use vitrine_server::{CmsClient, SiteConfig, StrapiClient};

use crate::ui;

/// Report the effective configuration. With `probe`, also ask the CMS for
/// its locale list to confirm it is reachable.
pub async fn run_check(path: &Path, config: &SiteConfig, probe: bool) -> Result<()> {
  ui::ok(&format!("{} is valid", path.display()));
  ui::kv("site", &format!("{} ({})", config.site.name, config.site.url));
  ui::kv("cms", &config.cms.url);
  ui::kv("media", config.cms.media_base());
  ui::kv("locales", &format!("{} [default {}]", config.i18n.locales.join(", "), config.i18n.default));
  ui::kv("revalidate", &format!("{}s", config.server.revalidate_secs));
  ui::kv("api token", if config.cms.api_token.is_some() { "set" } else { "none" });
  if config.draft.secret.is_none() {
    ui::warn("draft.secret is not set, draft mode cannot be enabled");
  }

  if !probe {
    return Ok(());
  }
  let client = StrapiClient::new(&config.cms).context("failed to create CMS client")?;
  match client.list_locales().await {
    Ok(codes) => {
      ui::ok(&format!("cms reachable, locales: {}", codes.join(", ")));
      Ok(())
    }
    Err(e) => {
      ui::error(&e.to_string());
      bail!("cms at {} is not reachable", config.cms.url)
    }
  }
}
