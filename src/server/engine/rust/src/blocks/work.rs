/* src/server/engine/rust/src/blocks/work.rs */

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use vitrine_server::model::{Block, WorkCategory, WorkItem, WorkLayout, available_categories};

use super::{RenderContext, img};
use crate::escape::{class_list, escape_html, safe_css_value};
use crate::labels::Labels;
use crate::rich_text::{is_safe_href, render_rich_text};

/// Unreserved URL characters stay readable in query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn chip(label: &str, href: &str, active: bool, color: Option<&str>) -> String {
  let class = if active { "vt-chip vt-chip--active" } else { "vt-chip" };
  let style = color
    .filter(|_| active)
    .and_then(safe_css_value)
    .map(|c| format!(" style=\"background-color:{};color:white\"", escape_html(c)))
    .unwrap_or_default();
  format!("<a class=\"{class}\" href=\"{}\"{style}>{}</a>", escape_html(href), escape_html(label))
}

fn filters(categories: &[WorkCategory], ctx: &RenderContext<'_>, labels: &Labels) -> String {
  let mut out = String::from("<nav class=\"vt-work__filters\">");
  out.push_str(&chip(labels.all_categories, ctx.path, ctx.category.is_none(), None));
  for category in categories {
    let href = format!("{}?category={}", ctx.path, utf8_percent_encode(&category.slug, QUERY_VALUE));
    let active = ctx.category == Some(category.slug.as_str());
    out.push_str(&chip(&category.name, &href, active, category.color.as_deref()));
  }
  out.push_str("</nav>");
  out
}

fn badge(category: &WorkCategory) -> String {
  let style = match category.color.as_deref().and_then(safe_css_value) {
    Some(color) => format!("background-color:{color}20;color:{color}"),
    None => "background-color:#f3f4f6;color:#6b7280".to_string(),
  };
  format!(
    "<span class=\"vt-badge\" style=\"{}\">{}</span>",
    escape_html(&style),
    escape_html(&category.name)
  )
}

fn card(item: &WorkItem, ctx: &RenderContext<'_>, labels: &Labels, layout: WorkLayout) -> String {
  let image = item.image.as_ref().and_then(|m| img(m, ctx, "vt-work-card__img")).unwrap_or_default();
  let badges: String = item.categories.iter().map(badge).collect();

  let mut meta = String::new();
  if let Some(client) = item.client.as_deref().filter(|c| !c.is_empty()) {
    meta.push_str(&format!("<span class=\"vt-work-card__client\">{}</span>", escape_html(client)));
  }
  if let Some(year) = item.year.as_deref().filter(|y| !y.is_empty()) {
    meta.push_str(&format!("<span class=\"vt-work-card__year\">{}</span>", escape_html(year)));
  }

  let description = render_rich_text(&item.description);
  let link = item
    .link
    .as_deref()
    .filter(|l| is_safe_href(l))
    .map(|l| {
      format!(
        "<a class=\"vt-work-card__link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(l),
        escape_html(l)
      )
    })
    .unwrap_or_default();
  let details = if description.is_empty() && link.is_empty() {
    String::new()
  } else {
    format!("<details class=\"vt-work-card__more\"><summary>{}</summary>{description}{link}</details>", labels.more)
  };

  format!(
    "<article class=\"vt-work-card vt-work-card--{}\">{image}<div class=\"vt-work-card__body\"><h3>{}</h3><div class=\"vt-work-card__meta\">{meta}</div><div class=\"vt-work-card__badges\">{badges}</div>{details}</div></article>",
    layout.as_str(),
    escape_html(&item.title)
  )
}

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Work(b) = block else { return None };
  let labels = Labels::for_locale(ctx.locale);

  if b.work_items.is_empty() {
    return Some(format!("<div class=\"vt-work vt-empty\">{}</div>", labels.no_work_items));
  }

  let categories = available_categories(&b.work_items);
  let filter_nav = if b.show_filters() && !categories.is_empty() {
    filters(&categories, ctx, labels)
  } else {
    String::new()
  };

  let layout = b.layout();
  let items: Vec<&WorkItem> =
    b.work_items.iter().filter(|item| ctx.category.is_none_or(|c| item.in_category(c))).collect();
  let cards: String = items.iter().map(|item| card(item, ctx, labels, layout)).collect();

  let grid_class = match layout {
    WorkLayout::List => "vt-work__list".to_string(),
    WorkLayout::Grid | WorkLayout::Masonry => class_list(&[
      "vt-work__grid",
      &format!("vt-cols-{}", b.columns().as_str()),
      if layout == WorkLayout::Masonry { "vt-work__grid--masonry" } else { "" },
    ]),
  };
  let empty = if items.is_empty() {
    format!("<p class=\"vt-empty\">{}</p>", labels.no_work_in_category)
  } else {
    String::new()
  };

  Some(format!("<div class=\"vt-work\">{filter_nav}<div class=\"{grid_class}\">{cards}</div>{empty}</div>"))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn block() -> Block {
    Block::from_value(json!({
      "__component": "blocks.work-block",
      "workItems": [
        { "id": 1, "title": "Brand book", "client": "ACME", "year": 2022,
          "categories": [{ "id": 1, "name": "Branding", "slug": "branding", "color": "#ff0000" }] },
        { "id": 2, "title": "Shop",
          "categories": [{ "id": 2, "name": "Web", "slug": "web" }] }
      ]
    }))
  }

  #[test]
  fn renders_filters_and_cards() {
    let ctx = RenderContext::new("fr", "", "/fr/work");
    let html = render(&block(), &ctx).unwrap();
    assert!(html.contains("href=\"/fr/work?category=branding\""));
    assert!(html.contains(">Tous</a>"));
    assert!(html.contains("Brand book"));
    assert!(html.contains("Shop"));
    assert!(html.contains("ACME"));
  }

  #[test]
  fn selected_category_filters_items() {
    let ctx = RenderContext::new("en", "", "/en/work").with_category(Some("web"));
    let html = render(&block(), &ctx).unwrap();
    assert!(!html.contains("Brand book"));
    assert!(html.contains("Shop"));
    assert!(html.contains("vt-chip vt-chip--active\" href=\"/en/work?category=web\""));
  }

  #[test]
  fn category_slugs_are_encoded_in_filter_links() {
    let block = Block::from_value(json!({
      "__component": "blocks.work-block",
      "workItems": [
        { "id": 1, "title": "Poster",
          "categories": [{ "id": 3, "name": "Print & Web", "slug": "print & web#1" }] },
        { "id": 2, "title": "Logo",
          "categories": [{ "id": 4, "name": "Motion", "slug": "motion-design" }] }
      ]
    }));
    let ctx = RenderContext::new("en", "", "/en/work").with_category(Some("print & web#1"));
    let html = render(&block, &ctx).unwrap();
    assert!(html.contains("href=\"/en/work?category=print%20%26%20web%231\""), "{html}");
    assert!(html.contains("href=\"/en/work?category=motion-design\""));
    assert!(html.contains("vt-chip vt-chip--active\" href=\"/en/work?category=print%20%26%20web%231\""));
    assert!(html.contains("Poster"));
    assert!(!html.contains("Logo"));
  }

  #[test]
  fn unknown_category_shows_message() {
    let ctx = RenderContext::new("fr", "", "/fr").with_category(Some("print"));
    let html = render(&block(), &ctx).unwrap();
    assert!(html.contains("Aucun élément trouvé pour cette catégorie."));
  }

  #[test]
  fn empty_block_shows_placeholder_text() {
    let empty = Block::from_value(json!({ "__component": "blocks.work-block" }));
    let html = render(&empty, &RenderContext::new("en", "", "/en")).unwrap();
    assert!(html.contains("No work items available."));
  }
}
