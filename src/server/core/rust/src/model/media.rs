/* src/server/core/rust/src/model/media.rs */

use serde::{Deserialize, Deserializer, Serialize};

/// An uploaded asset as referenced by page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
  pub url: String,
  #[serde(default)]
  pub alternative_text: Option<String>,
  #[serde(default)]
  pub width: Option<u32>,
  #[serde(default)]
  pub height: Option<u32>,
}

impl Media {
  /// Absolute URL for the asset. Upload paths (`/uploads/...`) are served by
  /// the CMS, so they get its public origin prepended.
  pub fn resolved_url(&self, public_base: &str) -> Option<String> {
    resolve_media_url(&self.url, public_base)
  }
}

pub fn resolve_media_url(url: &str, public_base: &str) -> Option<String> {
  let url = url.trim();
  if url.is_empty() {
    return None;
  }
  if url.starts_with("//") || !url.starts_with('/') {
    return Some(url.to_string());
  }
  Some(format!("{}{url}", public_base.trim_end_matches('/')))
}

// Media arrives in several shapes depending on how the relation was populated.
#[derive(Deserialize)]
#[serde(untagged)]
enum MediaRepr {
  Url(String),
  Flat(Media),
  Attributes { attributes: Media },
  Relation { data: Option<Box<MediaRepr>> },
}

impl MediaRepr {
  fn into_media(self) -> Option<Media> {
    match self {
      MediaRepr::Url(url) => {
        Some(Media { url, alternative_text: None, width: None, height: None })
      }
      MediaRepr::Flat(media) | MediaRepr::Attributes { attributes: media } => Some(media),
      MediaRepr::Relation { data } => data.and_then(|inner| inner.into_media()),
    }
  }
}

pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<Media>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<MediaRepr>::deserialize(deserializer)?.and_then(MediaRepr::into_media))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize)]
  struct Holder {
    #[serde(default, deserialize_with = "optional")]
    image: Option<Media>,
  }

  fn parse(json: &str) -> Option<Media> {
    serde_json::from_str::<Holder>(json).unwrap().image
  }

  #[test]
  fn flat_shape() {
    let m = parse(r#"{"image":{"url":"/uploads/a.jpg","alternativeText":"A","width":800}}"#).unwrap();
    assert_eq!(m.url, "/uploads/a.jpg");
    assert_eq!(m.alternative_text.as_deref(), Some("A"));
    assert_eq!(m.width, Some(800));
  }

  #[test]
  fn relation_shape() {
    let m = parse(r#"{"image":{"data":{"id":3,"attributes":{"url":"/uploads/b.png"}}}}"#).unwrap();
    assert_eq!(m.url, "/uploads/b.png");
  }

  #[test]
  fn attributes_shape() {
    let m = parse(r#"{"image":{"attributes":{"url":"https://cdn.test/c.png"}}}"#).unwrap();
    assert_eq!(m.url, "https://cdn.test/c.png");
  }

  #[test]
  fn bare_string_shape() {
    assert_eq!(parse(r#"{"image":"/uploads/d.webp"}"#).unwrap().url, "/uploads/d.webp");
  }

  #[test]
  fn empty_relation_and_null() {
    assert!(parse(r#"{"image":{"data":null}}"#).is_none());
    assert!(parse(r#"{"image":null}"#).is_none());
    assert!(parse("{}").is_none());
  }

  #[test]
  fn resolves_relative_urls_against_cms() {
    assert_eq!(
      resolve_media_url("/uploads/a.jpg", "http://cms.test/").as_deref(),
      Some("http://cms.test/uploads/a.jpg")
    );
    assert_eq!(
      resolve_media_url("https://cdn.test/a.jpg", "http://cms.test").as_deref(),
      Some("https://cdn.test/a.jpg")
    );
    assert_eq!(resolve_media_url("  ", "http://cms.test"), None);
  }
}
