/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use vitrine_server::SiteConfig;

pub const CONFIG_FILE: &str = "vitrine.toml";

/// Walk upward from `start` until a `vitrine.toml` is found.
pub fn find_vitrine_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found in {} or any parent directory", start.display());
    }
  }
}

/// Parse TOML text, overlay environment values from `lookup`, then validate.
pub fn parse_config(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<SiteConfig> {
  let mut config: SiteConfig = toml::from_str(content).context("invalid config")?;
  config.apply_env(lookup);
  config.validate()?;
  Ok(config)
}

pub fn load_vitrine_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_config(&content, |key| std::env::var(key).ok())
    .with_context(|| format!("failed to load {}", path.display()))
}
