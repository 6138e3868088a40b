/* src/server/core/rust/src/testing.rs */

//! In-memory `CmsClient` for tests of this crate and its dependents.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cms::{BoxFuture, CmsClient, CmsError, PageQuery, PublicationMode, WorkQuery};
use crate::contact::ContactSubmission;
use crate::model::{Page, TextValue, WorkItem};

#[derive(Default)]
pub struct MemoryCms {
  pages: Vec<Page>,
  drafts: Vec<Page>,
  work_items: Vec<WorkItem>,
  locales: Vec<String>,
  failing: bool,
  pub page_calls: AtomicUsize,
  pub locale_calls: AtomicUsize,
  pub work_queries: Mutex<Vec<WorkQuery>>,
  pub submissions: Mutex<Vec<ContactSubmission>>,
}

impl MemoryCms {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_page(mut self, page: Page) -> Self {
    self.pages.push(page);
    self
  }

  /// A page only visible in draft mode.
  pub fn with_draft(mut self, page: Page) -> Self {
    self.drafts.push(page);
    self
  }

  pub fn with_work_item(mut self, item: WorkItem) -> Self {
    self.work_items.push(item);
    self
  }

  pub fn with_locales(mut self, locales: &[&str]) -> Self {
    self.locales = locales.iter().map(|l| (*l).to_string()).collect();
    self
  }

  /// Every call fails with a 503.
  pub fn failing(mut self) -> Self {
    self.failing = true;
    self
  }

  fn unavailable(path: &str) -> CmsError {
    CmsError::Status { status: 503, path: path.to_string() }
  }

  pub fn page_calls(&self) -> usize {
    self.page_calls.load(Ordering::SeqCst)
  }
}

impl CmsClient for MemoryCms {
  fn find_pages<'a>(&'a self, query: &'a PageQuery) -> BoxFuture<'a, Result<Vec<Page>, CmsError>> {
    Box::pin(async move {
      self.page_calls.fetch_add(1, Ordering::SeqCst);
      if self.failing {
        return Err(Self::unavailable("/api/pages"));
      }
      let drafts = match query.mode {
        PublicationMode::Draft => self.drafts.as_slice(),
        PublicationMode::Live => &[],
      };
      Ok(
        drafts
          .iter()
          .chain(&self.pages)
          .filter(|p| p.slug == query.slug && p.locale.as_deref() == Some(query.locale.as_str()))
          .cloned()
          .collect(),
      )
    })
  }

  fn find_work_items<'a>(
    &'a self,
    query: &'a WorkQuery,
  ) -> BoxFuture<'a, Result<Vec<WorkItem>, CmsError>> {
    Box::pin(async move {
      if let Ok(mut queries) = self.work_queries.lock() {
        queries.push(query.clone());
      }
      if self.failing {
        return Err(Self::unavailable("/api/work-items"));
      }
      Ok(
        self
          .work_items
          .iter()
          .filter(|w| !query.featured_only || w.featured.unwrap_or(false))
          .filter(|w| {
            query.category_ids.is_empty()
              || w.categories.iter().any(|c| query.category_ids.contains(&c.id))
          })
          .take(query.limit as usize)
          .cloned()
          .collect(),
      )
    })
  }

  fn list_locales(&self) -> BoxFuture<'_, Result<Vec<String>, CmsError>> {
    Box::pin(async move {
      self.locale_calls.fetch_add(1, Ordering::SeqCst);
      if self.failing {
        return Err(Self::unavailable("/api/i18n/locales"));
      }
      Ok(self.locales.clone())
    })
  }

  fn submit_contact<'a>(
    &'a self,
    submission: &'a ContactSubmission,
  ) -> BoxFuture<'a, Result<(), CmsError>> {
    Box::pin(async move {
      if self.failing {
        return Err(Self::unavailable("/api/contact-messages"));
      }
      if let Ok(mut submissions) = self.submissions.lock() {
        submissions.push(submission.clone());
      }
      Ok(())
    })
  }
}

/// Minimal page with a plain title.
pub fn page(slug: &str, locale: &str, title: &str) -> Page {
  Page {
    id: None,
    document_id: None,
    slug: slug.to_string(),
    locale: Some(locale.to_string()),
    title: TextValue::Plain(title.to_string()),
    hide_title: None,
    seo_title: None,
    seo_description: None,
    seo_image: None,
    no_index: None,
    sections: Vec::new(),
    localizations: Vec::new(),
  }
}

/// Work item with the given categories as `(id, slug)`.
pub fn work_item(id: i64, title: &str, categories: &[(i64, &str)]) -> WorkItem {
  WorkItem {
    id,
    title: title.to_string(),
    slug: None,
    description: Vec::new(),
    image: None,
    categories: categories
      .iter()
      .map(|(cid, slug)| crate::model::WorkCategory {
        id: *cid,
        name: (*slug).to_string(),
        slug: (*slug).to_string(),
        color: None,
      })
      .collect(),
    featured: None,
    order: None,
    client: None,
    year: None,
    link: None,
  }
}
