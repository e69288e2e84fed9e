//! Traits for the external collaborators the core relies on.

mod hasher;
mod store;
mod token;

pub use hasher::PasswordHasher;
pub use store::{Mutation, Store, apply_mutation};
pub use token::TokenVerifier;
