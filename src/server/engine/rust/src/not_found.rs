/* src/server/engine/rust/src/not_found.rs */

use vitrine_server::seo::Metadata;

use crate::document::render_document;
use crate::escape::escape_html;
use crate::labels::Labels;

/// Localized 404 document. Unknown locales get the French text.
pub fn render_not_found(locale: &str, site_name: &str) -> String {
  let labels = Labels::for_locale(locale);
  let lang = if std::ptr::eq(labels, Labels::for_locale("en")) { "en" } else { "fr" };
  let meta = Metadata {
    title: "404".to_string(),
    description: None,
    robots: Some("noindex,nofollow"),
    canonical: String::new(),
    alternates: Vec::new(),
    og_image: None,
    preload: Vec::new(),
  };
  let body = format!(
    "<main class=\"vt-container vt-not-found\"><h1>404</h1><p>{}</p><a class=\"vt-button vt-button--primary\" href=\"/{lang}\">{}</a></main>",
    escape_html(labels.not_found_message),
    escape_html(labels.back_home)
  );
  render_document(&meta, lang, site_name, &body)
}
