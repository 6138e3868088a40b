/* src/server/engine/rust/src/blocks/text.rs */

use vitrine_server::model::{Block, ImagePosition};

use super::{RenderContext, img};
use crate::escape::class_list;
use crate::rich_text::render_rich_text;

pub(super) fn render_text(block: &Block, _ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Text(text) = block else { return None };

  let class = class_list(&[
    "vt-text",
    &format!("vt-block-align-{}", text.block_alignment().as_str()),
    &format!("vt-width-{}", text.max_width().as_str()),
    &format!("vt-text-{}", text.text_alignment().as_str()),
  ]);
  Some(format!("<div class=\"{class}\">{}</div>", render_rich_text(&text.content)))
}

pub(super) fn render_text_image(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::TextImage(b) = block else { return None };

  let rounded = b.rounded_image();
  let size = b.image_size().as_str();
  let image_class = if rounded { "vt-text-image__img vt-rounded" } else { "vt-text-image__img" };
  let image = b.image.as_ref().and_then(|m| img(m, ctx, image_class)).unwrap_or_default();
  let figure = format!("<div class=\"vt-text-image__media vt-media-{size}\">{image}</div>");
  let body = format!(
    "<div class=\"vt-text-image__body vt-text-{}\">{}</div>",
    b.text_alignment().as_str(),
    render_rich_text(&b.content)
  );

  let (first, second) = match b.image_position() {
    ImagePosition::Left => (&figure, &body),
    ImagePosition::Right => (&body, &figure),
  };
  let class = class_list(&[
    "vt-text-image",
    &format!("vt-text-image--{}", b.image_position().as_str()),
    &format!("vt-valign-{}", b.vertical_alignment().as_str()),
  ]);
  Some(format!("<div class=\"{class}\">{first}{second}</div>"))
}
