/* src/server/core/rust/src/seo.rs */

use crate::config::SiteSection;
use crate::model::{Block, Page};

pub const HOME_SLUG: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
  /// A locale code, or `x-default`.
  pub hreflang: String,
  pub href: String,
}

/// Everything the document head needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
  pub title: String,
  pub description: Option<String>,
  pub robots: Option<&'static str>,
  pub canonical: String,
  pub alternates: Vec<Alternate>,
  pub og_image: Option<String>,
  /// Image URLs worth fetching before first paint.
  pub preload: Vec<String>,
}

/// Site path of a page: `/fr` for the home page, `/fr/about` otherwise.
pub fn page_path(locale: &str, slug: &str) -> String {
  if slug.is_empty() || slug == HOME_SLUG {
    format!("/{locale}")
  } else {
    format!("/{locale}/{slug}")
  }
}

fn absolute(site_url: &str, path: &str) -> String {
  format!("{}{path}", site_url.trim_end_matches('/'))
}

/// hreflang links for the page's own locale and each localization, plus
/// `x-default` pointing at the default locale.
pub fn hreflang_alternates(
  page: &Page,
  site_url: &str,
  fallback_locale: &str,
  default_locale: &str,
) -> Vec<Alternate> {
  let own = page.locale.as_deref().unwrap_or(fallback_locale);
  let siblings = page.localizations.iter().map(|l| {
    let locale = l.locale.as_deref().unwrap_or(default_locale);
    let slug = l.slug.as_deref().unwrap_or(&page.slug);
    (locale, slug)
  });

  let mut out: Vec<Alternate> = Vec::new();
  for (locale, slug) in std::iter::once((own, page.slug.as_str())).chain(siblings) {
    if out.iter().any(|a| a.hreflang == locale) {
      continue;
    }
    out.push(Alternate {
      hreflang: locale.to_string(),
      href: absolute(site_url, &page_path(locale, slug)),
    });
  }

  let x_default = out
    .iter()
    .find(|a| a.hreflang == default_locale)
    .map_or_else(|| absolute(site_url, &page_path(default_locale, &page.slug)), |a| a.href.clone());
  out.push(Alternate { hreflang: "x-default".to_string(), href: x_default });
  out
}

/// Head metadata for `page` as served in `locale`.
pub fn page_metadata(
  page: &Page,
  site: &SiteSection,
  media_base: &str,
  locale: &str,
  default_locale: &str,
) -> Metadata {
  let title = page
    .seo_title
    .as_deref()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_string)
    .or_else(|| Some(page.title.plain_text().trim().to_string()).filter(|t| !t.is_empty()))
    .unwrap_or_else(|| site.name.clone());

  let description = page
    .seo_description
    .as_ref()
    .map(|d| d.plain_text().trim().to_string())
    .filter(|d| !d.is_empty());

  let served_locale = page.locale.as_deref().unwrap_or(locale);
  // Above-the-fold image plus the first portfolio image.
  let first_work = page.blocks().find(|b| matches!(b, Block::Work(_)));
  let mut preload: Vec<String> = Vec::new();
  for url in [page.first_block(), first_work]
    .into_iter()
    .flatten()
    .filter_map(|b| b.lead_image().and_then(|m| m.resolved_url(media_base)))
  {
    if !preload.contains(&url) {
      preload.push(url);
    }
  }

  Metadata {
    title,
    description,
    robots: page.no_index().then_some("noindex,nofollow"),
    canonical: absolute(&site.url, &page_path(served_locale, &page.slug)),
    alternates: hreflang_alternates(page, &site.url, locale, default_locale),
    og_image: page.seo_image.as_ref().and_then(|m| m.resolved_url(media_base)),
    preload,
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::model::{Block, Localization, Media, Section, TextValue};
  use crate::testing::page;

  fn site() -> SiteSection {
    SiteSection { name: "Studio".into(), url: "https://studio.test/".into() }
  }

  #[test]
  fn home_path_has_no_slug() {
    assert_eq!(page_path("fr", "home"), "/fr");
    assert_eq!(page_path("en", "about"), "/en/about");
  }

  #[test]
  fn title_prefers_seo_title() {
    let mut p = page("home", "fr", "Accueil");
    p.seo_title = Some("Studio | Accueil".into());
    assert_eq!(page_metadata(&p, &site(), "", "fr", "fr").title, "Studio | Accueil");

    p.seo_title = Some("  ".into());
    assert_eq!(page_metadata(&p, &site(), "", "fr", "fr").title, "Accueil");

    p.title = TextValue::default();
    assert_eq!(page_metadata(&p, &site(), "", "fr", "fr").title, "Studio");
  }

  #[test]
  fn description_from_rich_text() {
    let mut p = page("home", "fr", "Accueil");
    p.seo_description = Some(TextValue::Rich(vec![crate::model::RichTextNode::paragraph("Agence web")]));
    let meta = page_metadata(&p, &site(), "", "fr", "fr");
    assert_eq!(meta.description.as_deref(), Some("Agence web"));
    assert_eq!(meta.robots, None);
  }

  #[test]
  fn no_index_sets_robots() {
    let mut p = page("secret", "fr", "Secret");
    p.no_index = Some(true);
    assert_eq!(page_metadata(&p, &site(), "", "fr", "fr").robots, Some("noindex,nofollow"));
  }

  #[test]
  fn alternates_include_localizations_and_x_default() {
    let mut p = page("about", "en", "About");
    p.localizations = vec![
      Localization { id: Some(2), locale: Some("fr".into()), slug: Some("a-propos".into()) },
      Localization { id: Some(3), locale: Some("en".into()), slug: None },
    ];
    let alternates = hreflang_alternates(&p, "https://studio.test", "en", "fr");
    let pairs: Vec<_> = alternates.iter().map(|a| (a.hreflang.as_str(), a.href.as_str())).collect();
    assert_eq!(
      pairs,
      vec![
        ("en", "https://studio.test/en/about"),
        ("fr", "https://studio.test/fr/a-propos"),
        ("x-default", "https://studio.test/fr/a-propos"),
      ]
    );
  }

  #[test]
  fn canonical_uses_served_locale() {
    let p = page("home", "fr", "Accueil");
    let meta = page_metadata(&p, &site(), "", "en", "fr");
    assert_eq!(meta.canonical, "https://studio.test/fr");
  }

  #[test]
  fn og_image_and_preload_resolve_against_cms() {
    let mut p = page("home", "fr", "Accueil");
    p.seo_image = Some(Media {
      url: "/uploads/og.png".into(),
      alternative_text: None,
      width: None,
      height: None,
    });
    p.sections.push(Section {
      id: None,
      identifier: None,
      title: None,
      hide_title: None,
      spacing_top: None,
      spacing_bottom: None,
      blocks: vec![Block::from_value(json!({
        "__component": "blocks.image-block",
        "image": { "url": "/uploads/hero.jpg" }
      }))],
    });
    let meta = page_metadata(&p, &site(), "https://cms.test", "fr", "fr");
    assert_eq!(meta.og_image.as_deref(), Some("https://cms.test/uploads/og.png"));
    assert_eq!(meta.preload, vec!["https://cms.test/uploads/hero.jpg".to_string()]);
  }

  #[test]
  fn preload_adds_first_work_image_once() {
    let mut p = page("work", "fr", "Travaux");
    let mut work = crate::testing::work_item(1, "Site", &[]);
    work.image = Some(Media { url: "/uploads/w.jpg".into(), alternative_text: None, width: None, height: None });
    p.sections.push(Section {
      id: None,
      identifier: None,
      title: None,
      hide_title: None,
      spacing_top: None,
      spacing_bottom: None,
      blocks: vec![
        Block::from_value(json!({ "__component": "blocks.hero-block-simple-text", "content": "Hi" })),
        Block::from_value(json!({ "__component": "blocks.work-block", "workItems": [work] })),
      ],
    });
    let meta = page_metadata(&p, &site(), "https://cms.test", "fr", "fr");
    assert_eq!(meta.preload, vec!["https://cms.test/uploads/w.jpg".to_string()]);
  }
}
