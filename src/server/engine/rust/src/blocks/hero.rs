/* src/server/engine/rust/src/blocks/hero.rs */

use vitrine_server::model::Block;

use super::RenderContext;
use crate::escape::{class_list, escape_html};

pub(super) fn render(block: &Block, _ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Hero(hero) = block else { return None };

  let class = class_list(&[
    "vt-hero",
    &format!("vt-hero--{}", hero.height().as_str()),
    &format!("vt-align-{}", hero.text_alignment().as_str()),
  ]);
  let title = hero
    .title
    .as_deref()
    .filter(|t| !t.trim().is_empty())
    .map(|t| format!("<h1 class=\"vt-hero__title\">{}</h1>", escape_html(t)))
    .unwrap_or_default();
  // Line breaks in the content are preserved.
  let content = escape_html(&hero.content).replace('\n', "<br>");

  Some(format!(
    "<section class=\"{class}\"><div class=\"vt-container\">{title}<p class=\"vt-hero__content\">{content}</p></div></section>"
  ))
}
