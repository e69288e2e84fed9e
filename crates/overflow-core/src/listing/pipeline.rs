//! Count + fetch execution.

use tracing::{debug, instrument};

use crate::repo::Record;
use crate::traits::Store;
use crate::Result;

use super::{ListQuery, PagedResult};

/// Run a listing query against `store`.
///
/// The count and the fetch are independent reads and are issued
/// concurrently. Any store error fails the whole listing.
#[instrument(skip(store, query), fields(collection = %query.collection(), page = query.page().page()))]
pub async fn list<S>(store: &S, query: &ListQuery) -> Result<PagedResult<Record>>
where
    S: Store + ?Sized,
{
    let find = query.find_query();
    let (total, data) = tokio::try_join!(
        store.count(query.collection(), query.filter()),
        store.find(query.collection(), &find),
    )?;

    debug!(total, count = data.len(), "Listed records");
    Ok(PagedResult::new(query.page(), total, data))
}
