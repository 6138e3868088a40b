/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{debug, info};
use vitrine_engine::{Chrome, RenderContext, render_not_found, render_page};
use vitrine_server::{ContentSource, HOME_SLUG, PublicationMode, page_metadata, page_path};

use super::{AppState, locale_cookie, with_query};

/// Segments that look like files are never pages.
fn is_asset(segment: &str) -> bool {
  segment.contains('.')
}

pub(super) async fn handle_root(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  let locale = state.negotiate(&uri, &headers).await;
  debug!(locale, "redirecting root to negotiated locale");
  Redirect::temporary(&with_query(&format!("/{locale}"), &uri)).into_response()
}

/// `/{segment}`: a locale home page, or a slug missing its locale prefix.
pub(super) async fn handle_locale_root(
  State(state): State<Arc<AppState>>,
  Path(segment): Path<String>,
  Query(query): Query<HashMap<String, String>>,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  if state.locales.is_supported(&segment).await {
    return serve_page(&state, &segment, HOME_SLUG, &uri, &headers, &query).await;
  }
  if is_asset(&segment) {
    return not_found(&state, &uri, &headers).await;
  }
  let locale = state.negotiate(&uri, &headers).await;
  Redirect::temporary(&with_query(&page_path(&locale, &segment), &uri)).into_response()
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path((locale, slug)): Path<(String, String)>,
  Query(query): Query<HashMap<String, String>>,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  if is_asset(&slug) {
    return not_found(&state, &uri, &headers).await;
  }
  if !state.locales.is_supported(&locale).await {
    let target = page_path(state.default_locale(), &slug);
    debug!(locale, target, "unsupported locale, redirecting to default");
    return Redirect::temporary(&with_query(&target, &uri)).into_response();
  }
  serve_page(&state, &locale, &slug, &uri, &headers, &query).await
}

pub(super) async fn handle_not_found(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  not_found(&state, &uri, &headers).await
}

async fn not_found(state: &AppState, uri: &Uri, headers: &HeaderMap) -> Response {
  let locale = state.negotiate(uri, headers).await;
  (StatusCode::NOT_FOUND, Html(render_not_found(&locale, &state.site.name))).into_response()
}

async fn serve_page(
  state: &AppState,
  locale: &str,
  slug: &str,
  uri: &Uri,
  headers: &HeaderMap,
  query: &HashMap<String, String>,
) -> Response {
  let draft = state.is_draft(headers, query);
  let fetched = state.fetcher.fetch_page(slug, locale, PublicationMode::from_draft(draft)).await;
  let served = fetched.served_locale().unwrap_or(locale).to_string();

  // Keep the URL in step with the language actually shown.
  if fetched.source == ContentSource::DefaultLocale && served != locale {
    info!(slug, requested = locale, served, "redirecting to default-locale page");
    return Redirect::temporary(&with_query(&page_path(&served, slug), uri)).into_response();
  }

  let mut meta =
    page_metadata(&fetched.page, &state.site, &state.media_base, &served, state.default_locale());
  if draft {
    meta.robots = Some("noindex,nofollow");
  }

  let locales = state.locales.list().await;
  let chrome = Chrome { site_name: &state.site.name, locales: &locales };
  let ctx = RenderContext::new(&served, &state.media_base, uri.path())
    .with_category(query.get("category").map(String::as_str));
  let html = render_page(&fetched.page, &meta, &ctx, &state.dispatcher, &chrome);

  debug!(slug, locale = served, source = fetched.source.as_str(), draft, "page rendered");
  let cache_control = if draft {
    "private, no-store".to_string()
  } else {
    format!("public, s-maxage={}, stale-while-revalidate", state.revalidate_secs)
  };
  (
    [(header::CACHE_CONTROL, cache_control), (header::SET_COOKIE, locale_cookie(&served))],
    Html(html),
  )
    .into_response()
}
