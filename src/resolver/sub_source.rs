use super::{RequestContext, Resolver};
use crate::config::SourceResolution;
use crate::error::Result;
use crate::models::{SourceRef, SubSource};
use chrono::{DateTime, Utc};

/// Field resolvers of the `SubSource` type.
pub struct SubSourceResolver<'a> {
    root: &'a Resolver,
}

impl<'a> SubSourceResolver<'a> {
    pub(crate) fn new(root: &'a Resolver) -> Self {
        Self { root }
    }

    /// Resolves `SubSource.source`.
    ///
    /// HACK: every known caller selects only `source { id }`, and the id is
    /// already on the sub source, so by default no row is fetched: one query
    /// per sub source was exhausting the connection pool. Anything selected
    /// beyond `id` reads as zero values under `IdentityOnly`. Clients that
    /// need the publisher should select `sourceId` directly, or the server
    /// should run with `Lazy` or `Full`.
    pub async fn source(&self, ctx: &RequestContext, obj: &SubSource) -> Result<SourceRef> {
        match *self.root.config().source_resolution() {
            SourceResolution::IdentityOnly | SourceResolution::Lazy => {
                Ok(SourceRef::unresolved(obj.source_id.as_str()))
            }
            SourceResolution::Full => {
                let source = self
                    .root
                    .guarded(ctx, ctx.loader().load(&obj.source_id))
                    .await?;
                Ok(SourceRef::Resolved(source))
            }
        }
    }

    /// Resolves `SubSource.deletedAt`; a live sub source reports the zero instant.
    pub async fn deleted_at(
        &self,
        _ctx: &RequestContext,
        obj: &SubSource,
    ) -> Result<DateTime<Utc>> {
        Ok(obj.deleted_at.or_zero())
    }
}
