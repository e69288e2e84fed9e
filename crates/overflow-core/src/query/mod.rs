//! Query model: filters, sorts, pagination and raw parameters.

mod filter;
mod page;
mod params;
mod sort;

pub use filter::Filter;
pub use page::PageRequest;
pub use params::ListParams;
pub use sort::{SortDirection, SortSpec};

/// A fully specified fetch against one collection.
#[derive(Clone, Debug, PartialEq)]
pub struct FindQuery {
    pub filter: Filter,
    pub sort: SortSpec,
    pub skip: u64,
    /// Maximum number of records to return; `None` for no limit.
    pub limit: Option<u64>,
}

impl FindQuery {
    /// Every record matching `filter`, in `sort` order.
    pub fn all(filter: Filter, sort: SortSpec) -> Self {
        Self {
            filter,
            sort,
            skip: 0,
            limit: None,
        }
    }

    /// At most one record matching `filter`.
    pub fn first(filter: Filter) -> Self {
        Self {
            filter,
            sort: SortSpec::asc(crate::repo::models::fields::CREATED),
            skip: 0,
            limit: Some(1),
        }
    }

    /// Apply this query to an in-memory set of records.
    ///
    /// This is the reference semantics every [`Store`](crate::Store) must
    /// reproduce: filter, sort, then skip and limit.
    pub fn apply<I>(&self, records: I) -> Vec<crate::Record>
    where
        I: IntoIterator<Item = crate::Record>,
    {
        let mut matched: Vec<_> = records
            .into_iter()
            .filter(|r| self.filter.matches(r))
            .collect();
        self.sort.sort(&mut matched);

        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = self
            .limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        matched.into_iter().skip(skip).take(limit).collect()
    }
}
