/* src/server/adapter/axum/src/handler/locales.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocalesBody {
  locales: Vec<String>,
  default_locale: String,
}

pub(super) async fn handle_locales(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let body =
    LocalesBody { locales: state.locales.list().await, default_locale: state.default_locale().to_string() };
  (
    [(header::CACHE_CONTROL, "public, max-age=60, stale-while-revalidate=3600")],
    axum::Json(body),
  )
}
