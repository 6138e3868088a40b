/* src/server/core/rust/src/lib.rs */

pub mod cache;
pub mod cms;
pub mod config;
pub mod contact;
pub mod content;
pub mod errors;
pub mod locale;
pub mod model;
pub mod seo;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports for ergonomic use
pub use cache::RevalidateCache;
pub use cms::{BoxFuture, CmsClient, CmsError, PageQuery, PublicationMode, StrapiClient, WorkQuery};
pub use config::{
  CmsConfig, ConfigError, DraftSection, PlaceholderSection, ServerSection, SiteConfig, SiteSection,
};
pub use contact::{ContactOutcome, ContactSubmission};
pub use content::{ContentFetcher, ContentSource, FetchedPage};
pub use errors::SiteError;
pub use locale::{
  LOCALE_COOKIE, LocaleConfig, ResolveData, ResolveStrategy, SupportedLocales, default_strategies,
  from_accept_language, from_cookie, from_url_prefix, read_cookie, resolve_chain,
};
pub use seo::{Alternate, HOME_SLUG, Metadata, page_metadata, page_path};
