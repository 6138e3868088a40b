/* src/server/adapter/axum/src/handler/contact.rs */

use std::sync::Arc;

use axum::extract::{Form, FromRequest, Request, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::{info, warn};
use vitrine_server::{ContactOutcome, ContactSubmission, SiteError};

use super::{AppState, header_str};
use crate::error::AxumError;

/// Body from the rendered form (urlencoded) or a script (JSON).
async fn read_submission(req: Request) -> Result<ContactSubmission, SiteError> {
  let is_form = header_str(req.headers(), &header::CONTENT_TYPE)
    .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));
  if is_form {
    let Form(submission) =
      Form::<ContactSubmission>::from_request(req, &()).await.map_err(|e| SiteError::validation(e.body_text()))?;
    Ok(submission)
  } else {
    let axum::Json(submission) = axum::Json::<ContactSubmission>::from_request(req, &())
      .await
      .map_err(|e| SiteError::validation(e.body_text()))?;
    Ok(submission)
  }
}

pub(super) async fn handle_contact(
  State(state): State<Arc<AppState>>,
  req: Request,
) -> Result<impl IntoResponse, AxumError> {
  let submission = read_submission(req).await?;

  match submission.validate()? {
    ContactOutcome::Discarded => {
      info!("contact submission discarded by honeypot");
    }
    ContactOutcome::Accepted(submission) => {
      state.cms.submit_contact(&submission).await.map_err(|error| {
        warn!(%error, "contact submission not forwarded");
        SiteError::from(error)
      })?;
      info!(locale = submission.locale.as_deref().unwrap_or("-"), "contact submission forwarded");
    }
  }
  Ok(axum::Json(json!({ "ok": true })))
}
