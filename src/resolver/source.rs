use super::{RequestContext, Resolver};
use crate::config::SourceResolution;
use crate::error::Result;
use crate::models::{Source, SourceRef};
use chrono::{DateTime, Utc};

/// Field resolvers of the `Source` type, fed with the reference produced by
/// `SubSourceResolver::source` or by a root query.
pub struct SourceResolver<'a> {
    root: &'a Resolver,
}

impl<'a> SourceResolver<'a> {
    pub(crate) fn new(root: &'a Resolver) -> Self {
        Self { root }
    }

    /// `id` never needs the row.
    pub async fn id(&self, _ctx: &RequestContext, obj: &SourceRef) -> Result<String> {
        Ok(obj.id().to_string())
    }

    /// The record backing any field other than `id`.
    ///
    /// Under `IdentityOnly` an unresolved reference yields the partial record,
    /// so `name`, `domain` and the timestamps read as zero values.
    pub async fn materialize(&self, ctx: &RequestContext, obj: &SourceRef) -> Result<Source> {
        match obj {
            SourceRef::Resolved(source) => Ok(source.clone()),
            SourceRef::Unresolved { id } => match *self.root.config().source_resolution() {
                SourceResolution::IdentityOnly => {
                    debug!("source {} selected beyond id; serving partial record", id);
                    Ok(obj.to_partial())
                }
                SourceResolution::Lazy | SourceResolution::Full => {
                    self.root.guarded(ctx, ctx.loader().load(id)).await
                }
            },
        }
    }

    /// Same collapse as `SubSource.deletedAt`.
    pub async fn deleted_at(&self, ctx: &RequestContext, obj: &SourceRef) -> Result<DateTime<Utc>> {
        Ok(self.materialize(ctx, obj).await?.deleted_at.or_zero())
    }
}
