//! Registration of the resolvers with the async-graphql dispatcher.
//!
//! The schema owns routing, concurrency between sibling fields and the
//! partial-response convention: a failing field is reported with its path in
//! `Response::errors` while the rest of the response still resolves.

use crate::resolver::{RequestContext, Resolver};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Request, Response, Schema};

mod types;

pub use types::{Query, SourceObject, SubSourceObject};

pub type NewsfeedSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn build_schema(resolver: Resolver) -> NewsfeedSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}

/// Pulls the shared root and the per-request context out of the dispatcher.
pub(crate) fn parts<'a>(
    ctx: &'a Context<'_>,
) -> async_graphql::Result<(&'a Resolver, &'a RequestContext)> {
    let resolver = ctx.data::<Resolver>()?;
    let request_ctx = ctx.data::<RequestContext>()?;
    Ok((resolver, request_ctx))
}

/// Schema plus the root it was built from, so every request can be given a
/// fresh `RequestContext`.
pub struct Dispatcher {
    schema: NewsfeedSchema,
    resolver: Resolver,
}

impl Dispatcher {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            schema: build_schema(resolver.clone()),
            resolver,
        }
    }

    pub fn schema(&self) -> &NewsfeedSchema {
        &self.schema
    }

    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }

    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        self.execute_with(request, self.resolver.request_context())
            .await
    }

    /// Executes with a caller-supplied context, e.g. one whose cancellation
    /// token is tied to the client connection.
    pub async fn execute_with(
        &self,
        request: impl Into<Request>,
        request_ctx: RequestContext,
    ) -> Response {
        let request = request.into();
        debug!("executing {:?}", request.operation_name);
        let response = self.schema.execute(request.data(request_ctx)).await;
        for err in &response.errors {
            warn!("field error at {:?}: {}", err.path, err.message);
        }
        response
    }
}
