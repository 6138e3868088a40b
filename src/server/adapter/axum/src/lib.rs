/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use vitrine_engine::BlockDispatcher;
use vitrine_server::{
  CmsClient, CmsError, ContentFetcher, ResolveStrategy, SiteConfig, StrapiClient, SupportedLocales,
  default_strategies,
};

pub use error::AxumError;
pub use handler::DRAFT_COOKIE;
/// Re-export the core and engine crates for convenience
pub use vitrine_engine;
pub use vitrine_server;

/// A configured site: settings, content source, block renderers and the
/// locale negotiation chain.
pub struct Site {
  config: SiteConfig,
  cms: Arc<dyn CmsClient>,
  dispatcher: BlockDispatcher,
  strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl Site {
  pub fn new(config: SiteConfig, cms: Arc<dyn CmsClient>) -> Self {
    Self { config, cms, dispatcher: BlockDispatcher::default(), strategies: Vec::new() }
  }

  /// Site backed by the Strapi REST API described in `config.cms`.
  pub fn from_config(config: SiteConfig) -> Result<Self, CmsError> {
    let cms = StrapiClient::new(&config.cms)?;
    Ok(Self::new(config, Arc::new(cms)))
  }

  #[must_use]
  pub fn dispatcher(mut self, dispatcher: BlockDispatcher) -> Self {
    self.dispatcher = dispatcher;
    self
  }

  #[must_use]
  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }
}

/// Extension trait that converts a `Site` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for Site {
  fn into_axum_router(self) -> axum::Router {
    let Site { config, cms, dispatcher, strategies } = self;
    // Use default strategies when none provided
    let strategies = if strategies.is_empty() { default_strategies() } else { strategies };

    let fetcher = ContentFetcher::new(
      cms.clone(),
      config.i18n.clone(),
      config.placeholder.clone(),
      Duration::from_secs(config.server.revalidate_secs),
    )
    .with_cache_capacity(config.server.cache_capacity);
    let locales = SupportedLocales::new(config.i18n.clone(), cms.clone());

    handler::build_router(handler::AppState {
      media_base: config.cms.media_base().to_string(),
      revalidate_secs: config.server.revalidate_secs,
      draft_secret: config.draft.secret.clone(),
      site: config.site,
      cms,
      fetcher,
      locales,
      dispatcher,
      strategies,
    })
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Vitrine running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
