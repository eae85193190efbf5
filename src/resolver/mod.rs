use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::storage::SourceStore;
use std::future::Future;
use std::sync::Arc;

mod context;
pub mod loader;
mod query;
mod source;
mod sub_source;

pub use context::RequestContext;
pub use loader::SourceLoader;
pub use query::QueryResolver;
pub use source::SourceResolver;
pub use sub_source::SubSourceResolver;

/// Root the dispatcher calls into. Holds the collaborators field resolvers
/// need; build one per schema and hand it over explicitly.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn SourceStore>,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(store: Arc<dyn SourceStore>, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<dyn SourceStore> {
        &self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn query(&self) -> QueryResolver<'_> {
        QueryResolver::new(self)
    }

    pub fn sub_source(&self) -> SubSourceResolver<'_> {
        SubSourceResolver::new(self)
    }

    pub fn source(&self) -> SourceResolver<'_> {
        SourceResolver::new(self)
    }

    /// Fresh context for one incoming request, with its own loader cache.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(SourceLoader::new(self.store.clone()))
    }

    /// Runs store work for a field, giving up on cancellation or after the
    /// configured fetch timeout.
    pub(crate) async fn guarded<T, F>(&self, ctx: &RequestContext, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let timeout = self.config.fetch_timeout();
        tokio::select! {
            biased;
            _ = ctx.cancellation().cancelled() => {
                warn!("request cancelled while waiting for the store");
                Err(Error::Cancelled)
            }
            finished = tokio::time::timeout(timeout, work) => match finished {
                Ok(result) => result,
                Err(_) => {
                    warn!("store call exceeded {:?}", timeout);
                    Err(Error::Timeout(*self.config.fetch_timeout_ms()))
                }
            },
        }
    }
}
