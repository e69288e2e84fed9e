//! overflow-file - Filesystem-backed store and password hashing for overflow.
//!
//! [`FileStore`] keeps one pretty-printed JSON file per document and
//! implements [`overflow_core::Store`], so a [`overflow_core::Site`] can run
//! against a plain directory. [`BcryptHasher`] is the
//! [`overflow_core::PasswordHasher`] used alongside it.

mod hasher;
mod store;

pub use hasher::BcryptHasher;
pub use store::FileStore;
