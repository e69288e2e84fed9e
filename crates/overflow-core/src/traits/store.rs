//! Document store trait.

use async_trait::async_trait;

use crate::error::InvalidInputError;
use crate::query::{Filter, FindQuery};
use crate::repo::Record;
use crate::types::{Collection, RecordId};
use crate::Result;

/// An in-place edit applied by [`Store::update`].
pub type Mutation = Box<dyn FnOnce(&mut Record) -> Result<()> + Send>;

/// Run `mutate` against `record`, rejecting edits that change its id.
pub fn apply_mutation(mut record: Record, mutate: Mutation) -> Result<Record> {
    let id = record.id().clone();
    mutate(&mut record)?;
    if record.id() != &id {
        return Err(InvalidInputError::Record {
            reason: format!("update changed id {} to {}", id, record.id()),
        }
        .into());
    }
    Ok(record)
}

/// A document store.
///
/// Implementations must give `count` and `find` the semantics of
/// [`Filter::matches`] and [`FindQuery::apply`]: case-insensitive substring
/// matching on text fields, equality on scalar fields, contains-all on array
/// fields, and a total order with ties broken by id.
#[async_trait]
pub trait Store: Send + Sync {
    /// Count the records in `collection` matching `filter`.
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64>;

    /// Fetch the records in `collection` selected by `query`.
    async fn find(&self, collection: Collection, query: &FindQuery) -> Result<Vec<Record>>;

    /// Fetch a single record by id.
    async fn get(&self, collection: Collection, id: &RecordId) -> Result<Option<Record>>;

    /// Insert a new record. Fails if the id already exists.
    async fn insert(&self, collection: Collection, record: Record) -> Result<()>;

    /// Replace an existing record. Fails with not-found if it is absent.
    async fn replace(&self, collection: Collection, record: Record) -> Result<()>;

    /// Read, edit and write back one record without another writer slipping
    /// in between. Returns the stored result, or `None` if the record does
    /// not exist. An error from `mutate` leaves the record untouched.
    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        mutate: Mutation,
    ) -> Result<Option<Record>>;

    /// Delete a record. Returns whether it existed.
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<bool>;

    /// Fetch the first record matching `filter`.
    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Record>> {
        let mut records = self.find(collection, &FindQuery::first(filter.clone())).await?;
        Ok(records.pop())
    }
}
