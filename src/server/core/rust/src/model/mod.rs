/* src/server/core/rust/src/model/mod.rs */

mod block;
pub(crate) mod de;
mod media;
mod rich_text;
mod work;

pub use block::{
  BackgroundBlock, BackgroundKind, BackgroundPosition, BackgroundRepeat, BackgroundScope,
  BackgroundSize, Block, BlockAlign, Button, ButtonAlign, ButtonBlock, ButtonLayout, ButtonVariant,
  Card, CardsBlock, Columns, ContactFormBlock, HeroBlock, HeroHeight, HorizontalAlign, ImageBlock,
  ImagePosition, ImageSize, PrivacyPolicy, TextAlign, TextBlock, TextImageBlock, VerticalAlign,
  Width, WorkBlock, WorkLayout, tags,
};
pub use media::{Media, resolve_media_url};
pub use rich_text::{ListFormat, RichTextNode, TextValue, plain_text};
pub use work::{WorkCategory, WorkItem, available_categories};

use serde::{Deserialize, Serialize};

use de::{lenient, null_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
  None,
  Small,
  Medium,
  Large,
}

impl Spacing {
  pub fn as_str(self) -> &'static str {
    match self {
      Spacing::None => "none",
      Spacing::Small => "small",
      Spacing::Medium => "medium",
      Spacing::Large => "large",
    }
  }
}

/// Ordered group of blocks within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub identifier: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub hide_title: Option<bool>,
  #[serde(default, deserialize_with = "lenient")]
  pub spacing_top: Option<Spacing>,
  #[serde(default, deserialize_with = "lenient")]
  pub spacing_bottom: Option<Spacing>,
  #[serde(default, deserialize_with = "null_default")]
  pub blocks: Vec<Block>,
}

impl Section {
  /// Title to display, if any.
  pub fn visible_title(&self) -> Option<&str> {
    if self.hide_title.unwrap_or(false) {
      return None;
    }
    self.title.as_deref().filter(|t| !t.trim().is_empty())
  }
}

/// A sibling of a page in another locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub locale: Option<String>,
  #[serde(default)]
  pub slug: Option<String>,
}

/// A page as delivered by the CMS, identified by slug and locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub document_id: Option<String>,
  pub slug: String,
  #[serde(default)]
  pub locale: Option<String>,
  #[serde(default, deserialize_with = "null_default")]
  pub title: TextValue,
  #[serde(default)]
  pub hide_title: Option<bool>,
  #[serde(default)]
  pub seo_title: Option<String>,
  #[serde(default)]
  pub seo_description: Option<TextValue>,
  #[serde(default, deserialize_with = "media::optional")]
  pub seo_image: Option<Media>,
  #[serde(default)]
  pub no_index: Option<bool>,
  #[serde(default, deserialize_with = "null_default")]
  pub sections: Vec<Section>,
  #[serde(default, deserialize_with = "null_default")]
  pub localizations: Vec<Localization>,
}

impl Page {
  pub fn hide_title(&self) -> bool {
    self.hide_title.unwrap_or(false)
  }

  pub fn no_index(&self) -> bool {
    self.no_index.unwrap_or(false)
  }

  pub fn blocks(&self) -> impl Iterator<Item = &Block> {
    self.sections.iter().flat_map(|s| s.blocks.iter())
  }

  pub fn blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
    self.sections.iter_mut().flat_map(|s| s.blocks.iter_mut())
  }

  /// The first block of the first section, the one above the fold.
  pub fn first_block(&self) -> Option<&Block> {
    self.sections.first().and_then(|s| s.blocks.first())
  }
}
