//! The paginated response envelope.

use serde::{Deserialize, Serialize};

use crate::query::PageRequest;
use crate::Result;

/// The uniform envelope every listing returns.
///
/// `count == data.len()`, `pages == ceil(total / limit)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub status: String,
    pub count: u64,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> PagedResult<T> {
    /// Assemble the envelope for one page of `total` records.
    pub fn new(page: PageRequest, total: u64, data: Vec<T>) -> Self {
        Self {
            status: "success".to_string(),
            count: data.len() as u64,
            page: page.page(),
            pages: page.total_pages(total),
            total,
            data,
        }
    }

    /// A page with no matches.
    pub fn empty(page: PageRequest) -> Self {
        Self::new(page, 0, Vec::new())
    }

    /// Convert every item, failing on the first error.
    pub fn try_map<U, F>(self, f: F) -> Result<PagedResult<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        let data = self.data.into_iter().map(f).collect::<Result<Vec<_>>>()?;
        Ok(PagedResult {
            status: self.status,
            count: self.count,
            page: self.page,
            pages: self.pages,
            total: self.total,
            data,
        })
    }
}
