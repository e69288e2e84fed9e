//! In-process document store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{Error, StoreError};
use crate::query::{Filter, FindQuery};
use crate::repo::Record;
use crate::traits::{Mutation, Store, apply_mutation};
use crate::types::{Collection, RecordId};
use crate::Result;

type Documents = BTreeMap<RecordId, Record>;

/// A [`Store`] that keeps every collection in memory.
///
/// Useful for tests and for embedding the site without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Documents>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in `collection`, ignoring any filter.
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl Store for MemoryStore {
    #[instrument(skip(self, filter))]
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64> {
        let collections = self.collections.read().await;
        let count = collections
            .get(&collection)
            .map_or(0, |docs| docs.values().filter(|r| filter.matches(r)).count());
        Ok(count as u64)
    }

    #[instrument(skip(self, query))]
    async fn find(&self, collection: Collection, query: &FindQuery) -> Result<Vec<Record>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(&collection) else {
            return Ok(Vec::new());
        };
        Ok(query.apply(docs.values().cloned()))
    }

    async fn get(&self, collection: Collection, id: &RecordId) -> Result<Option<Record>> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).and_then(|docs| docs.get(id)).cloned())
    }

    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn insert(&self, collection: Collection, record: Record) -> Result<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if docs.contains_key(record.id()) {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
                id: record.id().to_string(),
            }
            .into());
        }
        debug!("Inserted record");
        docs.insert(record.id().clone(), record);
        Ok(())
    }

    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn replace(&self, collection: Collection, record: Record) -> Result<()> {
        let mut collections = self.collections.write().await;
        match collections
            .get_mut(&collection)
            .and_then(|docs| docs.get_mut(record.id()))
        {
            Some(slot) => {
                *slot = record;
                debug!("Replaced record");
                Ok(())
            }
            None => Err(Error::not_found("record", record.id().as_str())),
        }
    }

    #[instrument(skip(self, mutate))]
    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        mutate: Mutation,
    ) -> Result<Option<Record>> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections.get_mut(&collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(None);
        };

        let updated = apply_mutation(slot.clone(), mutate)?;
        *slot = updated.clone();
        debug!("Updated record");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(&collection)
            .and_then(|docs| docs.remove(id))
            .is_some();
        debug!(removed, "Deleted record");
        Ok(removed)
    }
}
