//! The listing pipeline.
//!
//! Raw [`ListParams`](crate::ListParams) are coerced exactly once, in
//! [`ListQuery::build`], into an immutable query carrying a normalized
//! [`PageRequest`](crate::PageRequest), a sort and a filter. [`list`] then
//! runs the count and the fetch concurrently and assembles a
//! [`PagedResult`].

mod paged;
mod pipeline;
mod policy;
mod query;

pub use paged::PagedResult;
pub use pipeline::list;
pub use policy::Resource;
pub use query::ListQuery;
