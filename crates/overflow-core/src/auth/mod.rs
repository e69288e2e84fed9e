//! Authentication types and route guards.
//!
//! Token issuance and password hashing live outside this crate, behind
//! [`TokenVerifier`](crate::TokenVerifier) and
//! [`PasswordHasher`](crate::PasswordHasher). This module holds what the
//! service needs on its side of those seams: the credential and token
//! wrappers, the verified [`Claims`], and the guards that gate operations.

mod claims;
mod credentials;
mod guard;
mod tokens;

pub use claims::Claims;
pub use credentials::Credentials;
pub use guard::{require_admin, require_auth, require_owner_or_admin};
pub use tokens::AccessToken;
