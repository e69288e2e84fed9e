//! overflow-core - Core types, listing pipeline and services for a Q&A site.
//!
//! The central piece is the listing pipeline in [`listing`]: raw request
//! parameters are turned into a validated [`ListQuery`] once, at the boundary,
//! and [`listing::list`] runs a count and a fetch against a [`Store`] to build
//! a [`PagedResult`] envelope.
//!
//! The [`Site`] facade layers the question, blog, user, tag and follow
//! operations on top of any [`Store`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use overflow_core::{ListParams, MemoryStore, Site};
//!
//! # async fn example() -> overflow_core::Result<()> {
//! let site = Site::new(MemoryStore::new());
//! let params = ListParams::new().key("borrow checker").page("2");
//! let page = site.list_questions(&params).await?;
//!
//! println!("{} of {} questions", page.count, page.total);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod listing;
pub mod memory;
pub mod query;
pub mod repo;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

pub use auth::{AccessToken, Claims, Credentials};
pub use config::ListingConfig;
pub use error::Error;
pub use listing::{ListQuery, PagedResult, Resource};
pub use memory::MemoryStore;
pub use query::{Filter, FindQuery, ListParams, PageRequest, SortDirection, SortSpec};
pub use repo::Record;
pub use service::Site;
pub use traits::{PasswordHasher, Store, TokenVerifier};
pub use types::{Collection, RecordId, Role, Tag, Username};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
