/* src/server/engine/rust/src/blocks/buttons.rs */

use vitrine_server::model::{Block, Button, ButtonAlign, ButtonLayout, resolve_media_url};

use super::RenderContext;
use crate::escape::{class_list, escape_html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLink {
  pub href: String,
  pub new_tab: bool,
  pub download: bool,
}

fn is_absolute(href: &str) -> bool {
  href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

fn is_passthrough(href: &str) -> bool {
  href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("tel:")
}

/// Target of a button. An attached file wins over the URL and opens in a new
/// tab; relative site links get the current locale prefix.
pub fn button_href(button: &Button, locale: &str, media_base: &str) -> Option<ButtonLink> {
  if let Some(file) = button.file.as_ref().and_then(|f| resolve_media_url(&f.url, media_base)) {
    return Some(ButtonLink { href: file, new_tab: true, download: true });
  }

  let url = button.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
  let href = if is_absolute(url) || is_passthrough(url) {
    url.to_string()
  } else if let Some(path) = url.strip_prefix('/') {
    let prefix = format!("/{locale}");
    if url == prefix || url.starts_with(&format!("{prefix}/")) {
      url.to_string()
    } else {
      format!("{prefix}/{path}")
    }
  } else {
    format!("/{locale}/{url}")
  };

  Some(ButtonLink { href, new_tab: button.is_external(), download: false })
}

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Buttons(b) = block else { return None };

  let justify = match (b.layout(), b.alignment()) {
    (ButtonLayout::Vertical, ButtonAlign::SpaceBetween) => "stretch".to_string(),
    (_, align) => align.as_str().to_string(),
  };
  let buttons: String = b
    .buttons
    .iter()
    .filter_map(|button| {
      let link = button_href(button, ctx.locale, ctx.media_base)?;
      let class = class_list(&[
        "vt-button",
        &format!("vt-button--{}", button.variant().as_str()),
        if b.equal_width() { "vt-button--equal" } else { "" },
      ]);
      let mut attrs = format!("href=\"{}\" class=\"{class}\"", escape_html(&link.href));
      if link.new_tab || link.download {
        attrs.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
      }
      if link.download {
        attrs.push_str(" download");
      }
      Some(format!("<a {attrs}>{}</a>", escape_html(&button.label)))
    })
    .collect();

  if buttons.is_empty() {
    return None;
  }
  let class = class_list(&[
    "vt-buttons",
    &format!("vt-buttons--{}", b.layout().as_str()),
    &format!("vt-justify-{justify}"),
  ]);
  Some(format!("<div class=\"{class}\">{buttons}</div>"))
}

#[cfg(test)]
mod tests {
  use vitrine_server::model::Media;

  use super::*;

  fn button(url: Option<&str>) -> Button {
    Button {
      label: "Go".into(),
      url: url.map(str::to_string),
      variant: None,
      is_external: None,
      file: None,
      icon: None,
    }
  }

  fn href(url: &str) -> String {
    button_href(&button(Some(url)), "en", "https://cms.test").unwrap().href
  }

  #[test]
  fn relative_links_get_locale_prefix() {
    assert_eq!(href("contact"), "/en/contact");
    assert_eq!(href("/contact"), "/en/contact");
  }

  #[test]
  fn localized_links_are_kept() {
    assert_eq!(href("/en/contact"), "/en/contact");
    assert_eq!(href("/en"), "/en");
    assert_eq!(href("/english"), "/en/english");
  }

  #[test]
  fn absolute_and_special_links_are_kept() {
    assert_eq!(href("https://x.test/a"), "https://x.test/a");
    assert_eq!(href("mailto:hi@x.test"), "mailto:hi@x.test");
    assert_eq!(href("#contact"), "#contact");
  }

  #[test]
  fn file_wins_over_url() {
    let mut b = button(Some("contact"));
    b.file = Some(Media {
      url: "/uploads/brochure.pdf".into(),
      alternative_text: None,
      width: None,
      height: None,
    });
    let link = button_href(&b, "fr", "https://cms.test").unwrap();
    assert_eq!(link.href, "https://cms.test/uploads/brochure.pdf");
    assert!(link.new_tab);
    assert!(link.download);
  }

  #[test]
  fn external_flag_opens_new_tab() {
    let mut b = button(Some("https://x.test"));
    b.is_external = Some(true);
    assert!(button_href(&b, "fr", "").unwrap().new_tab);
  }

  #[test]
  fn missing_url_has_no_link() {
    assert_eq!(button_href(&button(None), "fr", ""), None);
    assert_eq!(button_href(&button(Some("  ")), "fr", ""), None);
  }
}
