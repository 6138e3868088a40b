/* src/server/core/rust/src/model/work.rs */

use serde::{Deserialize, Serialize};

use super::de::{null_default, string_or_number};
use super::media::{self, Media};
use super::rich_text::RichTextNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCategory {
  pub id: i64,
  #[serde(default, deserialize_with = "null_default")]
  pub name: String,
  #[serde(default, deserialize_with = "null_default")]
  pub slug: String,
  #[serde(default)]
  pub color: Option<String>,
}

/// A portfolio entry (project, case study, service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
  pub id: i64,
  #[serde(default, deserialize_with = "null_default")]
  pub title: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default, deserialize_with = "null_default")]
  pub description: Vec<RichTextNode>,
  #[serde(default, deserialize_with = "media::optional")]
  pub image: Option<Media>,
  #[serde(default, deserialize_with = "null_default")]
  pub categories: Vec<WorkCategory>,
  #[serde(default)]
  pub featured: Option<bool>,
  #[serde(default)]
  pub order: Option<i64>,
  #[serde(default)]
  pub client: Option<String>,
  #[serde(default, deserialize_with = "string_or_number")]
  pub year: Option<String>,
  #[serde(default)]
  pub link: Option<String>,
}

impl WorkItem {
  pub fn in_category(&self, slug: &str) -> bool {
    self.categories.iter().any(|c| c.slug == slug)
  }
}

/// Distinct categories across `items`, sorted by name.
pub fn available_categories(items: &[WorkItem]) -> Vec<WorkCategory> {
  let mut seen = std::collections::HashSet::new();
  let mut out: Vec<WorkCategory> = items
    .iter()
    .flat_map(|item| item.categories.iter())
    .filter(|c| seen.insert(c.id))
    .cloned()
    .collect();
  out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
  out
}
