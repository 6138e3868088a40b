/* src/server/adapter/axum/src/handler/draft.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use vitrine_server::{HOME_SLUG, SiteError, page_path};

use super::{AppState, DRAFT_COOKIE};
use crate::error::AxumError;

/// Cookie value proving the browser passed the draft secret. Hashed so the
/// secret itself never leaves the server.
pub(crate) fn draft_token(secret: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(b"vitrine-draft:");
  hasher.update(secret.as_bytes());
  hex::encode(hasher.finalize())
}

/// `/api/draft?secret=..&slug=..[&locale=..]`: enter draft mode and open the
/// page being previewed.
pub(super) async fn handle_enable(
  State(state): State<Arc<AppState>>,
  Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AxumError> {
  let Some(expected) = state.draft_secret.as_deref().filter(|s| !s.is_empty()) else {
    warn!("draft mode requested but no secret is configured");
    return Err(SiteError::unauthorized("Draft mode is disabled").into());
  };
  if query.get("secret").map(String::as_str) != Some(expected) {
    warn!("draft mode requested with an invalid secret");
    return Err(SiteError::unauthorized("Invalid token").into());
  }

  let slug = query.get("slug").map_or(HOME_SLUG, String::as_str);
  let locale = query
    .get("locale")
    .map(String::as_str)
    .filter(|l| state.locales.config().is_supported(l))
    .unwrap_or(state.default_locale());
  let target = page_path(locale, slug);
  info!(slug, locale, "draft mode enabled");

  let token = draft_token(expected);
  let cookie = format!("{DRAFT_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
  Ok(([(header::SET_COOKIE, cookie)], Redirect::temporary(&target)).into_response())
}

/// `/api/draft/disable`: leave draft mode and go back home.
pub(super) async fn handle_disable() -> Response {
  let cookie = format!("{DRAFT_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
  ([(header::SET_COOKIE, cookie)], Redirect::temporary("/")).into_response()
}
