use crate::models::{Source, SubSource};
use crate::error::Result;
use async_trait::async_trait;

pub mod memory;
#[cfg(feature = "pg-storage")]
pub mod pg;

pub use memory::MemoryStore;
#[cfg(feature = "pg-storage")]
pub use pg::PgStore;

/// Read access to the entities the resolvers need.
///
/// Each call is one round trip to the backing store.
#[async_trait]
pub trait SourceStore: Send + Sync {
    async fn get_source(&self, id: &str) -> Result<Option<Source>>;
    /// Ids with no matching row are left out of the result.
    async fn get_sources(&self, ids: &[String]) -> Result<Vec<Source>>;

    async fn get_sub_source(&self, id: &str) -> Result<Option<SubSource>>;
    async fn list_sub_sources(&self) -> Result<Vec<SubSource>>;
}
