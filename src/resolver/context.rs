use super::SourceLoader;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Per-request state handed to every field resolver.
#[derive(Clone)]
pub struct RequestContext {
    cancellation: CancellationToken,
    loader: Arc<SourceLoader>,
}

impl RequestContext {
    pub fn new(loader: SourceLoader) -> Self {
        Self {
            cancellation: CancellationToken::new(),
            loader: Arc::new(loader),
        }
    }

    /// Ties the request to an outer token, e.g. the connection's.
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn loader(&self) -> &SourceLoader {
        &self.loader
    }
}
