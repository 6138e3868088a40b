/* src/cli/core/src/serve.rs */

use anyhow::{Context, Result};
use vitrine_server::SiteConfig;
use vitrine_server_axum::{IntoAxumRouter, Site};

use crate::ui::{self, CYAN, RESET};

pub async fn run_serve(mut config: SiteConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
  if let Some(host) = host {
    config.server.host = host;
  }
  if let Some(port) = port {
    config.server.port = port;
  }
  let addr = format!("{}:{}", config.server.host, config.server.port);

  ui::arrow(&format!("serving {CYAN}{}{RESET}", config.site.name));
  ui::kv("address", &format!("http://{addr}"));
  ui::kv("cms", &config.cms.url);
  ui::kv("locales", &config.i18n.locales.join(", "));
  ui::kv("draft", if config.draft.secret.is_some() { "enabled" } else { "disabled" });
  ui::detail("");

  let site = Site::from_config(config).context("failed to create CMS client")?;
  site.serve(&addr).await.map_err(|e| anyhow::anyhow!("server error: {e}"))
}
