/* src/server/core/rust/src/cms/strapi.rs */

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Level, debug, instrument};

use super::{BoxFuture, CmsClient, CmsError, PageQuery, PublicationMode, WorkQuery};
use crate::config::CmsConfig;
use crate::contact::ContactSubmission;
use crate::model::{Page, WorkItem};

/// HTTP client for a Strapi REST API.
#[derive(derive_more::Debug, Clone)]
pub struct StrapiClient {
  client: reqwest::Client,
  base_url: String,
  #[debug("\"<redacted>\"")]
  api_token: Option<String>,
  #[debug("\"<redacted>\"")]
  preview_token: Option<String>,
}

impl StrapiClient {
  #[instrument(skip_all, name = "strapi_client::new", err(Debug, level = Level::DEBUG))]
  pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
    let base_url = config.url.trim_end_matches('/').to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
      return Err(CmsError::InvalidUrl(base_url));
    }

    let client = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
    debug!(%base_url, "creating cms client");

    Ok(Self {
      client,
      base_url,
      api_token: config.api_token.clone(),
      preview_token: config.preview_token.clone(),
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Draft reads prefer the preview token and fall back to the API token.
  fn token(&self, mode: PublicationMode) -> Option<&str> {
    match mode {
      PublicationMode::Draft => self.preview_token.as_deref().or(self.api_token.as_deref()),
      PublicationMode::Live => self.api_token.as_deref(),
    }
  }

  fn request(
    &self,
    method: reqwest::Method,
    path: &str,
    mode: PublicationMode,
  ) -> reqwest::RequestBuilder {
    let req = self.client.request(method, format!("{}{path}", self.base_url));
    match self.token(mode) {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  #[instrument(skip(self, params), err(Debug, level = Level::DEBUG))]
  async fn get_json(
    &self,
    path: &str,
    params: &[(String, String)],
    mode: PublicationMode,
  ) -> Result<Value, CmsError> {
    let res = self.request(reqwest::Method::GET, path, mode).query(params).send().await?;
    let status = res.status();
    if !status.is_success() {
      return Err(CmsError::Status { status: status.as_u16(), path: path.to_string() });
    }
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
  }

  async fn find_collection<T: DeserializeOwned>(
    &self,
    path: &str,
    params: &[(String, String)],
    mode: PublicationMode,
  ) -> Result<Vec<T>, CmsError> {
    let body = self.get_json(path, params, mode).await?;
    let items = collection_entries(body)
      .into_iter()
      .map(serde_json::from_value)
      .collect::<Result<Vec<T>, _>>()?;
    debug!(path, count = items.len(), "cms collection fetched");
    Ok(items)
  }

  #[instrument(skip_all, err(Debug, level = Level::DEBUG))]
  async fn post_contact(&self, submission: &ContactSubmission) -> Result<(), CmsError> {
    let path = "/api/contact-messages";
    let res = self
      .request(reqwest::Method::POST, path, PublicationMode::Live)
      .json(&serde_json::json!({ "data": submission.payload() }))
      .send()
      .await?;
    let status = res.status();
    if !status.is_success() {
      return Err(CmsError::Status { status: status.as_u16(), path: path.to_string() });
    }
    Ok(())
  }
}

impl CmsClient for StrapiClient {
  fn find_pages<'a>(&'a self, query: &'a PageQuery) -> BoxFuture<'a, Result<Vec<Page>, CmsError>> {
    Box::pin(async move { self.find_collection("/api/pages", &query.params(), query.mode).await })
  }

  fn find_work_items<'a>(
    &'a self,
    query: &'a WorkQuery,
  ) -> BoxFuture<'a, Result<Vec<WorkItem>, CmsError>> {
    Box::pin(async move { self.find_collection("/api/work-items", &query.params(), query.mode).await })
  }

  fn list_locales(&self) -> BoxFuture<'_, Result<Vec<String>, CmsError>> {
    Box::pin(async move {
      let body = self.get_json("/api/i18n/locales", &[], PublicationMode::Live).await?;
      Ok(parse_locale_codes(&body))
    })
  }

  fn submit_contact<'a>(
    &'a self,
    submission: &'a ContactSubmission,
  ) -> BoxFuture<'a, Result<(), CmsError>> {
    Box::pin(self.post_contact(submission))
  }
}

/// Entries of a `{data: [...]}` collection response. Entries in the
/// `{id, attributes: {...}}` shape are flattened into a single object.
fn collection_entries(body: Value) -> Vec<Value> {
  let data = match body {
    Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
    other => other,
  };
  let entries = match data {
    Value::Array(items) => items,
    Value::Null => return Vec::new(),
    single => vec![single],
  };
  entries.into_iter().map(flatten_attributes).collect()
}

fn flatten_attributes(entry: Value) -> Value {
  let Value::Object(mut map) = entry else { return entry };
  if let Some(Value::Object(attributes)) = map.remove("attributes") {
    for (key, value) in attributes {
      map.entry(key).or_insert(value);
    }
  }
  Value::Object(map)
}

/// Locale codes from `/api/i18n/locales`. The plugin answers either with a
/// bare array of `{code}` or with `{data: [{code} | {attributes: {code}}]}`.
pub fn parse_locale_codes(body: &Value) -> Vec<String> {
  let entries = match body {
    Value::Array(items) => items.as_slice(),
    Value::Object(map) => match map.get("data") {
      Some(Value::Array(items)) => items.as_slice(),
      _ => &[],
    },
    _ => &[],
  };
  entries
    .iter()
    .filter_map(|entry| {
      entry.get("code").or_else(|| entry.get("attributes").and_then(|a| a.get("code")))
    })
    .filter_map(Value::as_str)
    .filter(|code| !code.is_empty())
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn locale_codes_from_bare_array() {
    let body = json!([{ "code": "fr", "isDefault": true }, { "code": "en" }, { "name": "x" }]);
    assert_eq!(parse_locale_codes(&body), vec!["fr", "en"]);
  }

  #[test]
  fn locale_codes_from_data_wrapper() {
    let body = json!({ "data": [{ "code": "de" }, { "attributes": { "code": "it" } }, { "code": "" }] });
    assert_eq!(parse_locale_codes(&body), vec!["de", "it"]);
  }

  #[test]
  fn locale_codes_from_unexpected_shape() {
    assert!(parse_locale_codes(&json!({ "error": "nope" })).is_empty());
    assert!(parse_locale_codes(&json!("fr")).is_empty());
  }

  #[test]
  fn collection_flattens_v4_entries() {
    let body = json!({
      "data": [
        { "id": 1, "attributes": { "slug": "home", "locale": "fr" } },
        { "id": 2, "slug": "about" }
      ],
      "meta": {}
    });
    let entries = collection_entries(body);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["slug"], "home");
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[1]["slug"], "about");
  }

  #[test]
  fn collection_handles_null_data() {
    assert!(collection_entries(json!({ "data": null })).is_empty());
  }

  #[test]
  fn rejects_url_without_scheme() {
    let config = CmsConfig { url: "localhost:1337".into(), ..CmsConfig::default() };
    assert!(matches!(StrapiClient::new(&config), Err(CmsError::InvalidUrl(_))));
  }

  #[test]
  fn draft_prefers_preview_token() {
    let config = CmsConfig {
      api_token: Some("api".into()),
      preview_token: Some("preview".into()),
      ..CmsConfig::default()
    };
    let client = StrapiClient::new(&config).unwrap();
    assert_eq!(client.token(PublicationMode::Draft), Some("preview"));
    assert_eq!(client.token(PublicationMode::Live), Some("api"));

    let config = CmsConfig { api_token: Some("api".into()), ..CmsConfig::default() };
    let client = StrapiClient::new(&config).unwrap();
    assert_eq!(client.token(PublicationMode::Draft), Some("api"));
  }
}
