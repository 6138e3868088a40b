/* src/server/core/rust/src/cms/query.rs */

use super::PublicationMode;

pub const PAGE_FIELDS: &[&str] =
  &["title", "hideTitle", "slug", "seoTitle", "seoDescription", "noIndex", "locale"];

pub const PAGE_POPULATE: &str = "sections.blocks.cards.image,sections.blocks.image,\
sections.blocks.imageDesktop,sections.blocks.buttons.file,sections.blocks.workItems.image,\
sections.blocks.workItems.categories,sections.blocks.filterByCategories,\
sections.blocks.privacyPolicy,seoImage,localizations";

const WORK_POPULATE: &[(&str, &str)] = &[
  ("populate[categories][fields][0]", "name"),
  ("populate[categories][fields][1]", "slug"),
  ("populate[categories][fields][2]", "color"),
  ("populate[image][fields][0]", "url"),
  ("populate[image][fields][1]", "alternativeText"),
  ("populate[image][fields][2]", "width"),
  ("populate[image][fields][3]", "height"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
  pub slug: String,
  pub locale: String,
  pub mode: PublicationMode,
}

impl PageQuery {
  pub fn new(slug: impl Into<String>, locale: impl Into<String>, mode: PublicationMode) -> Self {
    Self { slug: slug.into(), locale: locale.into(), mode }
  }

  /// Query string pairs for `GET /api/pages`.
  pub fn params(&self) -> Vec<(String, String)> {
    let mut params = vec![("filters[slug][$eq]".to_string(), self.slug.clone())];
    params.extend(PAGE_FIELDS.iter().enumerate().map(|(i, f)| (format!("fields[{i}]"), (*f).into())));
    params.push(("populate".into(), PAGE_POPULATE.into()));
    params.push(("locale".into(), self.locale.clone()));
    params.push(("publicationState".into(), self.mode.as_str().into()));
    params
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkQuery {
  pub locale: Option<String>,
  pub limit: u32,
  pub featured_only: bool,
  /// Empty means every category.
  pub category_ids: Vec<i64>,
  pub mode: PublicationMode,
}

impl WorkQuery {
  /// Query string pairs for `GET /api/work-items`.
  pub fn params(&self) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = WORK_POPULATE
      .iter()
      .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
      .collect();
    params.push(("sort[0]".into(), "order:asc".into()));
    params.push(("sort[1]".into(), "createdAt:desc".into()));
    params.push(("pagination[limit]".into(), self.limit.to_string()));
    params.push(("publicationState".into(), self.mode.as_str().into()));
    if let Some(locale) = &self.locale {
      params.push(("locale".into(), locale.clone()));
    }
    if self.featured_only {
      params.push(("filters[featured][$eq]".into(), "true".into()));
    }
    for (i, id) in self.category_ids.iter().enumerate() {
      params.push((format!("filters[categories][id][$in][{i}]"), id.to_string()));
    }
    params
  }
}
