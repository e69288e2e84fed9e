//! bcrypt password hashing.

use bcrypt::{DEFAULT_COST, hash, verify};

use overflow_core::error::{Error, InvalidInputError};
use overflow_core::{PasswordHasher, Result};

/// Hashes passwords with bcrypt at a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the given work factor (4 to 31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

fn map_bcrypt(err: bcrypt::BcryptError) -> Error {
    Error::InvalidInput(InvalidInputError::Other {
        message: err.to_string(),
    })
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        hash(password, self.cost).map_err(map_bcrypt)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        verify(password, hash).map_err(map_bcrypt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hasher = BcryptHasher::new(4);
        let hashed = hasher.hash("password1").unwrap();

        assert_ne!(hashed, "password1");
        assert!(hasher.verify("password1", &hashed).unwrap());
        assert!(!hasher.verify("password2", &hashed).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let hasher = BcryptHasher::new(4);
        assert!(hasher.verify("password1", "not-a-hash").is_err());
    }

    #[test]
    fn invalid_cost_is_an_error() {
        assert!(BcryptHasher::new(99).hash("password1").is_err());
    }
}
