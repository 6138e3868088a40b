/* src/server/engine/rust/src/blocks/mod.rs */

mod background;
mod buttons;
mod cards;
mod contact_form;
mod hero;
mod image;
mod text;
mod work;

use std::collections::HashMap;

use tracing::debug;
use vitrine_server::model::{Block, Media, tags};

use crate::escape::escape_html;

pub use background::hex_to_rgba;
pub use buttons::{ButtonLink, button_href};
pub use contact_form::CONTACT_FORM_MARKER;

/// Per-request inputs shared by all renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
  pub locale: &'a str,
  /// Origin prepended to relative media URLs.
  pub media_base: &'a str,
  /// Site path of the page being rendered, used for filter links.
  pub path: &'a str,
  /// Work category selected with `?category=`.
  pub category: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
  pub fn new(locale: &'a str, media_base: &'a str, path: &'a str) -> Self {
    Self { locale, media_base, path, category: None }
  }

  pub fn with_category(mut self, category: Option<&'a str>) -> Self {
    self.category = category.filter(|c| !c.is_empty());
    self
  }

  pub(crate) fn media_url(&self, media: &Media) -> Option<String> {
    media.resolved_url(self.media_base)
  }
}

/// A renderer returns `None` when the block is not the variant it handles.
pub type BlockRenderer = fn(&Block, &RenderContext<'_>) -> Option<String>;

/// Maps CMS component tags to renderers.
#[derive(Clone)]
pub struct BlockDispatcher {
  renderers: HashMap<String, BlockRenderer>,
}

impl Default for BlockDispatcher {
  fn default() -> Self {
    Self::empty()
      .with_renderer(tags::HERO, hero::render)
      .with_renderer(tags::TEXT, text::render_text)
      .with_renderer(tags::IMAGE, image::render)
      .with_renderer(tags::TEXT_IMAGE, text::render_text_image)
      .with_renderer(tags::CARDS, cards::render)
      .with_renderer(tags::BUTTONS, buttons::render)
      .with_renderer(tags::BACKGROUND, background::render)
      .with_renderer(tags::WORK, work::render)
      .with_renderer(tags::CONTACT_FORM, contact_form::render)
  }
}

impl BlockDispatcher {
  pub fn empty() -> Self {
    Self { renderers: HashMap::new() }
  }

  /// Register or replace the renderer for `tag`.
  #[must_use]
  pub fn with_renderer(mut self, tag: impl Into<String>, renderer: BlockRenderer) -> Self {
    self.renderers.insert(tag.into(), renderer);
    self
  }

  pub fn has_renderer(&self, tag: &str) -> bool {
    self.renderers.contains_key(tag)
  }

  pub fn render(&self, block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
    let component = block.component();
    let Some(renderer) = self.renderers.get(component) else {
      debug!(component, "no renderer registered, skipping block");
      return None;
    };
    let html = renderer(block, ctx);
    if html.is_none() {
      debug!(component, "renderer produced nothing");
    }
    html
  }

  /// Concatenated output of every renderable block, in order.
  pub fn render_all(&self, blocks: &[Block], ctx: &RenderContext<'_>) -> String {
    blocks.iter().filter_map(|b| self.render(b, ctx)).collect()
  }
}

/// `<img>` for a media item, or nothing when it has no usable URL.
pub(crate) fn img(media: &Media, ctx: &RenderContext<'_>, class: &str) -> Option<String> {
  let src = ctx.media_url(media)?;
  let alt = media.alternative_text.as_deref().unwrap_or_default();
  let mut tag = format!(
    "<img class=\"{class}\" src=\"{}\" alt=\"{}\" loading=\"lazy\"",
    escape_html(&src),
    escape_html(alt)
  );
  if let (Some(w), Some(h)) = (media.width, media.height) {
    tag.push_str(&format!(" width=\"{w}\" height=\"{h}\""));
  }
  tag.push('>');
  Some(tag)
}
