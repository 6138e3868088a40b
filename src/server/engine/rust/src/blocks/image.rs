/* src/server/engine/rust/src/blocks/image.rs */

use vitrine_server::model::Block;

use super::{RenderContext, img};
use crate::escape::{class_list, escape_html};

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Image(b) = block else { return None };
  // Nothing to show without an image.
  let image = img(b.image.as_ref()?, ctx, "vt-image__img")?;

  let caption = b
    .caption
    .as_deref()
    .filter(|c| !c.trim().is_empty())
    .map(|c| format!("<figcaption>{}</figcaption>", escape_html(c)))
    .unwrap_or_default();
  let class = class_list(&[
    "vt-image",
    &format!("vt-block-align-{}", b.alignment().as_str()),
    &format!("vt-width-{}", b.size().as_str()),
  ]);
  Some(format!("<figure class=\"{class}\">{image}{caption}</figure>"))
}
