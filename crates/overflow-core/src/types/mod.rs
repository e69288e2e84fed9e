//! Validated identifier and value types.

mod collection;
mod record_id;
mod role;
mod tag;
mod username;

pub use collection::Collection;
pub use record_id::RecordId;
pub use role::Role;
pub use tag::Tag;
pub use username::{MAX_USERNAME_LEN, Username};
