/* src/server/core/rust/src/cms/mod.rs */

mod query;
mod strapi;

use std::future::Future;
use std::pin::Pin;

pub use query::{PageQuery, WorkQuery, PAGE_FIELDS, PAGE_POPULATE};
pub use strapi::{StrapiClient, parse_locale_codes};

use crate::contact::ContactSubmission;
use crate::model::{Page, WorkItem};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
  #[error("cms request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("cms returned status {status} for {path}")]
  Status { status: u16, path: String },

  #[error("cms response could not be decoded: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("invalid cms url: {0}")]
  InvalidUrl(String),
}

/// Which content state to read from the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PublicationMode {
  #[default]
  Live,
  /// Unpublished drafts included; never cached.
  Draft,
}

impl PublicationMode {
  pub fn from_draft(draft: bool) -> Self {
    if draft { PublicationMode::Draft } else { PublicationMode::Live }
  }

  pub fn is_draft(self) -> bool {
    self == PublicationMode::Draft
  }

  /// Value of the `publicationState` query parameter.
  pub fn as_str(self) -> &'static str {
    match self {
      PublicationMode::Live => "live",
      PublicationMode::Draft => "preview",
    }
  }
}

/// Read and write access to the headless CMS.
///
/// `StrapiClient` talks to a real instance over HTTP; tests substitute an
/// in-memory implementation.
pub trait CmsClient: Send + Sync {
  fn find_pages<'a>(&'a self, query: &'a PageQuery) -> BoxFuture<'a, Result<Vec<Page>, CmsError>>;

  fn find_work_items<'a>(
    &'a self,
    query: &'a WorkQuery,
  ) -> BoxFuture<'a, Result<Vec<WorkItem>, CmsError>>;

  /// Locale codes enabled in the CMS i18n plugin.
  fn list_locales(&self) -> BoxFuture<'_, Result<Vec<String>, CmsError>>;

  fn submit_contact<'a>(
    &'a self,
    submission: &'a ContactSubmission,
  ) -> BoxFuture<'a, Result<(), CmsError>>;
}
