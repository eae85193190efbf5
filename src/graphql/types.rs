use super::parts;
use crate::models::{Source, SourceRef, SubSource};
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

pub struct Query;

#[Object]
impl Query {
    async fn sub_source(&self, ctx: &Context<'_>, id: String) -> Result<Option<SubSourceObject>> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver
            .query()
            .sub_source(request_ctx, &id)
            .await?
            .map(SubSourceObject))
    }

    async fn sub_sources(&self, ctx: &Context<'_>) -> Result<Vec<SubSourceObject>> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver
            .query()
            .sub_sources(request_ctx)
            .await?
            .into_iter()
            .map(SubSourceObject)
            .collect())
    }

    async fn source(&self, ctx: &Context<'_>, id: String) -> Result<Option<SourceObject>> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver
            .query()
            .source(request_ctx, &id)
            .await?
            .map(|source| SourceObject(SourceRef::Resolved(source))))
    }
}

pub struct SubSourceObject(pub SubSource);

#[Object(name = "SubSource")]
impl SubSourceObject {
    async fn id(&self) -> &str {
        &self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn external_identifier(&self) -> &str {
        &self.0.external_identifier
    }

    async fn avatar_url(&self) -> &str {
        &self.0.avatar_url
    }

    async fn origin_url(&self) -> &str {
        &self.0.origin_url
    }

    async fn is_from_shared_post(&self) -> bool {
        self.0.is_from_shared_post
    }

    /// Prefer this over `source { id }`.
    async fn source_id(&self) -> &str {
        &self.0.source_id
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn deleted_at(&self, ctx: &Context<'_>) -> Result<DateTime<Utc>> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver.sub_source().deleted_at(request_ctx, &self.0).await?)
    }

    /// Only `id` is reliable unless the server materializes sources.
    async fn source(&self, ctx: &Context<'_>) -> Result<SourceObject> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(SourceObject(
            resolver.sub_source().source(request_ctx, &self.0).await?,
        ))
    }
}

pub struct SourceObject(pub SourceRef);

impl SourceObject {
    async fn record(&self, ctx: &Context<'_>) -> Result<Source> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver.source().materialize(request_ctx, &self.0).await?)
    }
}

#[Object(name = "Source")]
impl SourceObject {
    async fn id(&self, ctx: &Context<'_>) -> Result<String> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver.source().id(request_ctx, &self.0).await?)
    }

    async fn name(&self, ctx: &Context<'_>) -> Result<String> {
        Ok(self.record(ctx).await?.name)
    }

    async fn domain(&self, ctx: &Context<'_>) -> Result<String> {
        Ok(self.record(ctx).await?.domain)
    }

    async fn created_at(&self, ctx: &Context<'_>) -> Result<DateTime<Utc>> {
        Ok(self.record(ctx).await?.created_at)
    }

    async fn deleted_at(&self, ctx: &Context<'_>) -> Result<DateTime<Utc>> {
        let (resolver, request_ctx) = parts(ctx)?;
        Ok(resolver.source().deleted_at(request_ctx, &self.0).await?)
    }
}
