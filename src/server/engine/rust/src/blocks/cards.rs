/* src/server/engine/rust/src/blocks/cards.rs */

use vitrine_server::model::{Block, Card};

use super::{RenderContext, img};
use crate::escape::{class_list, escape_html};
use crate::rich_text::render_rich_text;

fn card(card: &Card, ctx: &RenderContext<'_>, style: &str) -> String {
  let image = card.image.as_ref().and_then(|m| img(m, ctx, "vt-card__img")).unwrap_or_default();
  let subtitle = card
    .subtitle
    .as_deref()
    .filter(|s| !s.trim().is_empty())
    .map(|s| format!("<p class=\"vt-card__subtitle\">{}</p>", escape_html(s)))
    .unwrap_or_default();
  format!(
    "<article class=\"vt-card\"{style}>{image}<h3 class=\"vt-card__title\">{}</h3>{subtitle}<div class=\"vt-card__content\">{}</div></article>",
    escape_html(&card.title),
    render_rich_text(&card.content)
  )
}

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Cards(b) = block else { return None };
  if b.cards.is_empty() {
    return None;
  }

  if b.overlap() {
    // Stacked fan: earlier cards sit on top.
    let count = b.cards.len();
    let cards: String = b
      .cards
      .iter()
      .enumerate()
      .map(|(i, c)| {
        let margin = if i > 0 { "margin-left:-2rem;" } else { "" };
        card(c, ctx, &format!(" style=\"z-index:{};{margin}\"", count - i))
      })
      .collect();
    return Some(format!("<div class=\"vt-cards vt-cards--overlap\">{cards}</div>"));
  }

  let class = class_list(&[
    "vt-cards",
    &format!("vt-cols-{}", b.columns().as_str()),
    &format!("vt-justify-{}", b.alignment().as_str()),
  ]);
  let cards: String = b.cards.iter().map(|c| card(c, ctx, "")).collect();
  Some(format!("<div class=\"{class}\">{cards}</div>"))
}
