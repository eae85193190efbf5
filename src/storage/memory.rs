use super::SourceStore;
use crate::error::Result;
use crate::models::{Source, SubSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// In-process store. Counts source lookups so callers can check how many
/// round trips a resolution cost.
#[derive(Default)]
pub struct MemoryStore {
    sources: RwLock<HashMap<String, Source>>,
    sub_sources: RwLock<Vec<SubSource>>,
    source_fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(sources: Vec<Source>, sub_sources: Vec<SubSource>) -> Self {
        Self {
            sources: RwLock::new(sources.into_iter().map(|s| (s.id.clone(), s)).collect()),
            sub_sources: RwLock::new(sub_sources),
            source_fetches: AtomicUsize::new(0),
        }
    }

    pub async fn insert_source(&self, source: Source) {
        self.sources.write().await.insert(source.id.clone(), source);
    }

    pub async fn insert_sub_source(&self, sub_source: SubSource) {
        let mut sub_sources = self.sub_sources.write().await;
        match sub_sources.iter_mut().find(|s| s.id == sub_source.id) {
            Some(existing) => *existing = sub_source,
            None => sub_sources.push(sub_source),
        }
    }

    /// Number of `get_source`/`get_sources` calls served so far.
    pub fn source_fetches(&self) -> usize {
        self.source_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceStore for MemoryStore {
    async fn get_source(&self, id: &str) -> Result<Option<Source>> {
        self.source_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.sources.read().await.get(id).cloned())
    }

    async fn get_sources(&self, ids: &[String]) -> Result<Vec<Source>> {
        self.source_fetches.fetch_add(1, Ordering::SeqCst);
        let sources = self.sources.read().await;
        Ok(ids.iter().filter_map(|id| sources.get(id).cloned()).collect())
    }

    async fn get_sub_source(&self, id: &str) -> Result<Option<SubSource>> {
        Ok(self
            .sub_sources
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list_sub_sources(&self) -> Result<Vec<SubSource>> {
        Ok(self.sub_sources.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub_source(id: &str, source_id: &str) -> SubSource {
        SubSource {
            id: id.to_string(),
            source_id: source_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn counts_source_round_trips() {
        let store = MemoryStore::with_data(vec![Source::with_id("src1")], vec![]);
        assert_eq!(store.source_fetches(), 0);

        assert!(store.get_source("src1").await.unwrap().is_some());
        assert!(store.get_source("nope").await.unwrap().is_none());
        let found = store
            .get_sources(&["src1".to_string(), "nope".to_string()])
            .await
            .unwrap();
        assert_eq!(found, vec![Source::with_id("src1")]);
        assert_eq!(store.source_fetches(), 3);
    }

    #[tokio::test]
    async fn sub_source_reads_do_not_count() {
        let store = MemoryStore::new();
        store.insert_sub_source(sub_source("ss1", "src9")).await;
        store.insert_sub_source(sub_source("ss2", "src7")).await;
        store.insert_sub_source(sub_source("ss1", "src7")).await;

        let listed = store.list_sub_sources().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].source_id, "src7");
        assert_eq!(
            store.get_sub_source("ss2").await.unwrap(),
            Some(sub_source("ss2", "src7"))
        );
        assert_eq!(store.source_fetches(), 0);
    }
}
