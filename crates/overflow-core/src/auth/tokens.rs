//! Access token type.

use std::fmt;

/// A bearer token presented with an authenticated request.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; only a [`TokenVerifier`](crate::TokenVerifier) looks inside
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extract the token from an `Authorization: Bearer <token>` header value.
    pub fn from_bearer(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then(|| Self::new(token))
    }

    /// Returns the raw token value.
    ///
    /// # Security
    ///
    /// Use only when verifying the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn parses_bearer_header() {
        assert_eq!(
            AccessToken::from_bearer("Bearer abc.def").unwrap().as_str(),
            "abc.def"
        );
        assert_eq!(
            AccessToken::from_bearer("bearer   abc").unwrap().as_str(),
            "abc"
        );
        assert!(AccessToken::from_bearer("Basic abc").is_none());
        assert!(AccessToken::from_bearer("Bearer ").is_none());
        assert!(AccessToken::from_bearer("abc").is_none());
    }
}
