/* src/server/engine/rust/src/page.rs */

use vitrine_server::model::{Page, Section, Spacing};
use vitrine_server::seo::{Metadata, page_path};

use crate::blocks::{BlockDispatcher, RenderContext};
use crate::document::render_document;
use crate::escape::{class_list, escape_html};
use crate::labels::Labels;

/// Site-wide pieces around the page content.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
  pub site_name: &'a str,
  /// Locales offered in the switcher, in display order.
  pub locales: &'a [String],
}

/// Link target for each switcher entry: the localized sibling when the page
/// has one, else the same slug under the other locale.
pub fn locale_links(page: &Page, locales: &[String]) -> Vec<(String, String)> {
  locales
    .iter()
    .map(|locale| {
      let slug = if page.locale.as_deref() == Some(locale.as_str()) {
        page.slug.as_str()
      } else {
        page
          .localizations
          .iter()
          .find(|l| l.locale.as_deref() == Some(locale.as_str()))
          .and_then(|l| l.slug.as_deref())
          .unwrap_or(&page.slug)
      };
      (locale.clone(), page_path(locale, slug))
    })
    .collect()
}

fn header(page: &Page, ctx: &RenderContext<'_>, chrome: &Chrome<'_>) -> String {
  let labels = Labels::for_locale(ctx.locale);
  let links: String = locale_links(page, chrome.locales)
    .into_iter()
    .map(|(locale, href)| {
      let current = if locale == ctx.locale { " aria-current=\"true\"" } else { "" };
      format!(
        "<li><a href=\"{}\" hreflang=\"{locale}\" lang=\"{locale}\"{current}>{}</a></li>",
        escape_html(&href),
        escape_html(&locale.to_uppercase()),
        locale = escape_html(&locale),
      )
    })
    .collect();
  format!(
    "<header class=\"vt-header\"><a class=\"vt-brand\" href=\"/{}\">{}</a><nav aria-label=\"{}\"><ul class=\"vt-locales\">{links}</ul></nav></header>",
    escape_html(ctx.locale),
    escape_html(chrome.site_name),
    labels.languages,
  )
}

fn anchor(section: &Section, index: usize) -> String {
  match (&section.identifier, section.id) {
    (Some(identifier), _) if !identifier.trim().is_empty() => identifier.trim().to_string(),
    (_, Some(id)) => format!("section-{id}"),
    _ => format!("section-{}", index + 1),
  }
}

fn section(
  section: &Section,
  index: usize,
  ctx: &RenderContext<'_>,
  dispatcher: &BlockDispatcher,
) -> String {
  let spacing = |s: Option<Spacing>| s.unwrap_or(Spacing::Medium).as_str();
  let class = class_list(&[
    "vt-section",
    &format!("vt-pt-{}", spacing(section.spacing_top)),
    &format!("vt-pb-{}", spacing(section.spacing_bottom)),
  ]);
  let title = section
    .visible_title()
    .map(|t| format!("<h2 class=\"vt-section__title\">{}</h2>", escape_html(t)))
    .unwrap_or_default();
  format!(
    "<section id=\"{}\" class=\"{class}\"><div class=\"vt-container\">{title}{}</div></section>",
    escape_html(&anchor(section, index)),
    dispatcher.render_all(&section.blocks, ctx)
  )
}

/// Page body: header with locale switcher, optional title, every section
/// with its blocks, footer.
pub fn compose_page(
  page: &Page,
  ctx: &RenderContext<'_>,
  dispatcher: &BlockDispatcher,
  chrome: &Chrome<'_>,
) -> String {
  let mut body = header(page, ctx, chrome);
  body.push_str("<main>");

  let title = page.title.plain_text();
  if !page.hide_title() && !title.trim().is_empty() {
    body.push_str(&format!(
      "<div class=\"vt-container vt-page-title\"><h1>{}</h1></div>",
      escape_html(title.trim())
    ));
  }
  for (i, s) in page.sections.iter().enumerate() {
    body.push_str(&section(s, i, ctx, dispatcher));
  }

  body.push_str("</main>");
  body.push_str(&format!(
    "<footer class=\"vt-footer\"><p>&copy; {}</p></footer>",
    escape_html(chrome.site_name)
  ));
  body
}

/// Full HTML document for `page`.
pub fn render_page(
  page: &Page,
  meta: &Metadata,
  ctx: &RenderContext<'_>,
  dispatcher: &BlockDispatcher,
  chrome: &Chrome<'_>,
) -> String {
  let body = compose_page(page, ctx, dispatcher, chrome);
  render_document(meta, ctx.locale, chrome.site_name, &body)
}
