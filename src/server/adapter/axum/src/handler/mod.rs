/* src/server/adapter/axum/src/handler/mod.rs */

mod contact;
mod debug;
mod draft;
mod locales;
mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderMap, Uri, header};
use axum::routing::{get, post};
use vitrine_engine::BlockDispatcher;
use vitrine_server::{
  CmsClient, ContentFetcher, LOCALE_COOKIE, ResolveData, ResolveStrategy, SiteSection,
  SupportedLocales, read_cookie, resolve_chain,
};

/// Cookie set while previewing unpublished content.
pub const DRAFT_COOKIE: &str = "vitrine-draft";

pub(crate) use draft::draft_token;

const ONE_YEAR: u64 = 60 * 60 * 24 * 365;

pub(crate) struct AppState {
  pub site: SiteSection,
  pub media_base: String,
  pub revalidate_secs: u64,
  pub draft_secret: Option<String>,
  pub cms: Arc<dyn CmsClient>,
  pub fetcher: ContentFetcher,
  pub locales: SupportedLocales,
  pub dispatcher: BlockDispatcher,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl AppState {
  pub fn default_locale(&self) -> &str {
    &self.locales.config().default
  }

  /// Locale for a request without a usable locale segment.
  pub async fn negotiate(&self, uri: &Uri, headers: &HeaderMap) -> String {
    let locales = self.locales.list().await;
    let url = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let data = ResolveData {
      url,
      path_locale: None,
      cookie_header: header_str(headers, &header::COOKIE),
      accept_language: header_str(headers, &header::ACCEPT_LANGUAGE),
      locales: &locales,
      default_locale: self.default_locale(),
    };
    resolve_chain(&self.strategies, &data)
  }

  /// `?draft=true`, or a draft cookie minted from the configured secret.
  pub fn is_draft(&self, headers: &HeaderMap, query: &HashMap<String, String>) -> bool {
    if query.get("draft").is_some_and(|v| v == "true") {
      return true;
    }
    let Some(secret) = self.draft_secret.as_deref().filter(|s| !s.is_empty()) else {
      return false;
    };
    cookie(headers, DRAFT_COOKIE).is_some_and(|value| value == draft_token(secret))
  }
}

pub(crate) fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(page::handle_root))
    .route("/api/locales", get(locales::handle_locales))
    .route("/api/contact", post(contact::handle_contact))
    .route("/api/draft", get(draft::handle_enable))
    .route("/api/draft/disable", get(draft::handle_disable))
    .route("/debug/locale", get(debug::handle_locale))
    .route("/{locale}", get(page::handle_locale_root))
    .route("/{locale}/{slug}", get(page::handle_page))
    .fallback(page::handle_not_found)
    .with_state(Arc::new(state))
}

pub(super) fn header_str<'a>(headers: &'a HeaderMap, name: &header::HeaderName) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

pub(super) fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  read_cookie(header_str(headers, &header::COOKIE)?, name)
}

pub(super) fn locale_cookie(locale: &str) -> String {
  format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age={ONE_YEAR}; SameSite=Lax")
}

/// `path` with the original query string, if any.
pub(super) fn with_query(path: &str, uri: &Uri) -> String {
  match uri.query() {
    Some(q) if !q.is_empty() => format!("{path}?{q}"),
    _ => path.to_string(),
  }
}
