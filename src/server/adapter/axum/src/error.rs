/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use vitrine_server::SiteError;

/// `SiteError` rendered as the JSON error envelope.
#[derive(Debug)]
pub struct AxumError(pub SiteError);

impl From<SiteError> for AxumError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
  ok: bool,
  error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
  code: &'a str,
  message: &'a str,
  transient: bool,
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status =
      StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorBody {
      ok: false,
      error: ErrorDetail {
        code: self.0.code(),
        message: self.0.message(),
        transient: self.0.is_transient(),
      },
    };
    (status, axum::Json(body)).into_response()
  }
}
