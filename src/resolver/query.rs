use super::{RequestContext, Resolver};
use crate::config::SourceResolution;
use crate::error::Result;
use crate::models::{Source, SubSource};

/// Root query fields.
pub struct QueryResolver<'a> {
    root: &'a Resolver,
}

impl<'a> QueryResolver<'a> {
    pub(crate) fn new(root: &'a Resolver) -> Self {
        Self { root }
    }

    pub async fn sub_source(&self, ctx: &RequestContext, id: &str) -> Result<Option<SubSource>> {
        self.root
            .guarded(ctx, self.root.store().get_sub_source(id))
            .await
    }

    /// Lists sub sources. When parents may be fetched later in the request,
    /// all of them are loaded up front in one call.
    pub async fn sub_sources(&self, ctx: &RequestContext) -> Result<Vec<SubSource>> {
        let sub_sources = self
            .root
            .guarded(ctx, self.root.store().list_sub_sources())
            .await?;
        match *self.root.config().source_resolution() {
            SourceResolution::IdentityOnly => {}
            SourceResolution::Lazy | SourceResolution::Full => {
                let ids = sub_sources.iter().map(|s| s.source_id.clone());
                let found = self.root.guarded(ctx, ctx.loader().load_many(ids)).await?;
                debug!(
                    "{} parent sources loaded for {} sub sources",
                    found.len(),
                    sub_sources.len()
                );
            }
        }
        Ok(sub_sources)
    }

    pub async fn source(&self, ctx: &RequestContext, id: &str) -> Result<Option<Source>> {
        let found = self
            .root
            .guarded(ctx, self.root.store().get_source(id))
            .await?;
        debug!("source {} found: {}", id, found.is_some());
        Ok(found)
    }
}
