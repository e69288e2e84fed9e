//! Route guards.

use tracing::debug;

use crate::error::{AuthError, Error};
use crate::traits::TokenVerifier;
use crate::types::RecordId;
use crate::Result;

use super::{AccessToken, Claims};

/// Require a valid bearer token, returning its claims.
///
/// `authorization` is the raw `Authorization` header value, if any.
pub fn require_auth<V>(authorization: Option<&str>, verifier: &V) -> Result<Claims>
where
    V: TokenVerifier + ?Sized,
{
    let header = authorization
        .filter(|h| !h.trim().is_empty())
        .ok_or(AuthError::MissingToken)?;

    let token = AccessToken::from_bearer(header).ok_or_else(|| AuthError::InvalidToken {
        reason: "malformed authorization header".to_string(),
    })?;

    let claims = verifier.verify(&token)?;
    debug!(user = %claims.username, role = %claims.role, "Authenticated request");
    Ok(claims)
}

/// Require the admin role.
pub fn require_admin(claims: &Claims) -> Result<()> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(Error::forbidden("Only Admin can do this operation"))
    }
}

/// Require that the caller authored the document, or is an admin.
pub fn require_owner_or_admin(claims: &Claims, author: &RecordId) -> Result<()> {
    if &claims.id == author || claims.is_admin() {
        Ok(())
    } else {
        Err(Error::forbidden("Not authorized to modify this content"))
    }
}
