//! Token verification trait.

use crate::Result;
use crate::auth::{AccessToken, Claims};

/// Decodes and verifies signed access tokens.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return the claims it carries.
    ///
    /// Expired or tampered tokens must yield an
    /// [`AuthError::InvalidToken`](crate::error::AuthError::InvalidToken).
    fn verify(&self, token: &AccessToken) -> Result<Claims>;
}
