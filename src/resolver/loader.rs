//! Request-scoped `Source` loader.
//!
//! Lookups issued by sibling fields within the batching window are coalesced
//! into one `get_sources` call, and every answer (including "no such source")
//! is cached for the rest of the request.

use crate::error::{Error, Result};
use crate::models::Source;
use crate::storage::SourceStore;
use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use std::collections::HashMap;
use std::sync::Arc;

/// Batch function behind the loader: one store round trip per batch of ids.
pub struct SourceStoreLoader {
    store: Arc<dyn SourceStore>,
}

impl Loader<String> for SourceStoreLoader {
    // `None` remembers ids the store did not know
    type Value = Option<Source>;
    type Error = Error;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Option<Source>>> {
        debug!("loading {} sources", keys.len());
        let found = self.store.get_sources(keys).await.map_err(|e| {
            error!("{}", e);
            e
        })?;
        let mut loaded = keys
            .iter()
            .map(|id| (id.clone(), None))
            .collect::<HashMap<String, Option<Source>>>();
        for source in found {
            loaded.insert(source.id.clone(), Some(source));
        }
        Ok(loaded)
    }
}

pub struct SourceLoader {
    inner: DataLoader<SourceStoreLoader, HashMapCache>,
}

impl SourceLoader {
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self {
            inner: DataLoader::with_cache(
                SourceStoreLoader { store },
                tokio::spawn,
                HashMapCache::default(),
            ),
        }
    }

    /// The source with this id, fetched together with whatever else the
    /// request asks for in the same window.
    pub async fn load(&self, id: &str) -> Result<Source> {
        self.inner
            .load_one(id.to_string())
            .await?
            .flatten()
            .ok_or_else(|| Error::SourceNotFound(id.to_string()))
    }

    /// Loads every id not cached yet in one batch. Unknown ids are left out of
    /// the result.
    pub async fn load_many<I>(&self, ids: I) -> Result<HashMap<String, Source>>
    where
        I: IntoIterator<Item = String>,
    {
        Ok(self
            .inner
            .load_many(ids)
            .await?
            .into_iter()
            .filter_map(|(id, source)| source.map(|source| (id, source)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubSource;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::time::{Duration, Instant};

    fn loader_with(ids: &[&str]) -> (Arc<MemoryStore>, SourceLoader) {
        let store = Arc::new(MemoryStore::with_data(
            ids.iter().map(|id| Source::with_id(*id)).collect(),
            vec![],
        ));
        let loader = SourceLoader::new(store.clone());
        (store, loader)
    }

    const LATENCY: Duration = Duration::from_millis(200);

    /// Answers like the memory store, but every round trip takes `LATENCY`.
    struct SlowStore(MemoryStore);

    #[async_trait]
    impl SourceStore for SlowStore {
        async fn get_source(&self, id: &str) -> Result<Option<Source>> {
            tokio::time::sleep(LATENCY).await;
            self.0.get_source(id).await
        }

        async fn get_sources(&self, ids: &[String]) -> Result<Vec<Source>> {
            tokio::time::sleep(LATENCY).await;
            self.0.get_sources(ids).await
        }

        async fn get_sub_source(&self, id: &str) -> Result<Option<SubSource>> {
            self.0.get_sub_source(id).await
        }

        async fn list_sub_sources(&self) -> Result<Vec<SubSource>> {
            self.0.list_sub_sources().await
        }
    }

    #[tokio::test]
    async fn load_hits_store_once_per_id() {
        let (store, loader) = loader_with(&["src1", "src2"]);
        assert_eq!(loader.load("src1").await.unwrap().id, "src1");
        assert_eq!(loader.load("src1").await.unwrap().id, "src1");
        assert_eq!(store.source_fetches(), 1);
        assert_eq!(loader.load("src2").await.unwrap().id, "src2");
        assert_eq!(store.source_fetches(), 2);
    }

    #[tokio::test]
    async fn missing_source_is_remembered() {
        let (store, loader) = loader_with(&[]);
        assert_eq!(
            loader.load("ghost").await,
            Err(Error::SourceNotFound("ghost".to_string()))
        );
        assert_eq!(
            loader.load("ghost").await,
            Err(Error::SourceNotFound("ghost".to_string()))
        );
        assert_eq!(store.source_fetches(), 1);
    }

    #[tokio::test]
    async fn load_many_batches_and_skips_cached() {
        let (store, loader) = loader_with(&["src1", "src2", "src3"]);
        loader.load("src3").await.unwrap();

        let found = loader
            .load_many(vec![
                "src1".to_string(),
                "src2".to_string(),
                "src1".to_string(),
                "src3".to_string(),
                "ghost".to_string(),
            ])
            .await
            .unwrap();
        assert_eq!(store.source_fetches(), 2);
        let mut ids = found.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids, vec!["src1", "src2", "src3"]);

        loader.load_many(vec!["src2".to_string()]).await.unwrap();
        assert_eq!(loader.load("src1").await.unwrap().id, "src1");
        assert!(loader.load("ghost").await.is_err());
        assert_eq!(store.source_fetches(), 2);
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_fetch() {
        let (store, loader) = loader_with(&["src1"]);
        let (a, b, c) = tokio::join!(loader.load("src1"), loader.load("src1"), loader.load("src1"));
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(c.unwrap().id, "src1");
        assert_eq!(store.source_fetches(), 1);
    }

    #[tokio::test]
    async fn concurrent_loads_of_distinct_ids_cost_one_round_trip() {
        let ids = ["src1", "src2", "src3", "src4"];
        let store = Arc::new(SlowStore(MemoryStore::with_data(
            ids.iter().map(|id| Source::with_id(*id)).collect(),
            vec![],
        )));
        let loader = SourceLoader::new(store.clone());

        let started = Instant::now();
        let (a, b, c, d) = tokio::join!(
            loader.load("src1"),
            loader.load("src2"),
            loader.load("src3"),
            loader.load("src4"),
        );
        let elapsed = started.elapsed();

        let loaded = vec![a.unwrap().id, b.unwrap().id, c.unwrap().id, d.unwrap().id];
        assert_eq!(loaded, ids);
        assert_eq!(store.0.source_fetches(), 1);
        // one store latency, not four back to back
        assert!(elapsed < LATENCY * 2, "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn store_errors_are_not_cached() {
        struct FlakyStore(std::sync::atomic::AtomicBool);

        #[async_trait]
        impl SourceStore for FlakyStore {
            async fn get_source(&self, _id: &str) -> Result<Option<Source>> {
                unreachable!("the loader only batches")
            }

            async fn get_sources(&self, ids: &[String]) -> Result<Vec<Source>> {
                if self.0.swap(false, std::sync::atomic::Ordering::SeqCst) {
                    return Err(Error::DbError("connection reset".to_string()));
                }
                Ok(ids.iter().map(|id| Source::with_id(id.as_str())).collect())
            }

            async fn get_sub_source(&self, _id: &str) -> Result<Option<SubSource>> {
                Ok(None)
            }

            async fn list_sub_sources(&self) -> Result<Vec<SubSource>> {
                Ok(vec![])
            }
        }

        let loader = SourceLoader::new(Arc::new(FlakyStore(true.into())));
        assert_eq!(
            loader.load("src1").await,
            Err(Error::DbError("connection reset".to_string()))
        );
        assert_eq!(loader.load("src1").await.unwrap().id, "src1");
    }
}
