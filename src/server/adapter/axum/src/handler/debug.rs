/* src/server/adapter/axum/src/handler/debug.rs */

use axum::http::HeaderMap;
use serde_json::json;
use vitrine_server::LOCALE_COOKIE;

use super::cookie;

/// Echo the locale cookie the browser sent.
pub(super) async fn handle_locale(headers: HeaderMap) -> axum::Json<serde_json::Value> {
  axum::Json(json!({ "localeCookie": cookie(&headers, LOCALE_COOKIE) }))
}
