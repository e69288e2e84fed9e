//! Username type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum username length in characters.
pub const MAX_USERNAME_LEN: usize = 16;

/// A validated, normalized username.
///
/// Usernames are trimmed and lowercased on construction, so lookups are
/// case-insensitive.
///
/// # Example
///
/// ```
/// use overflow_core::Username;
///
/// let name = Username::new("  Alice_01 ").unwrap();
/// assert_eq!(name.as_str(), "alice_01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a username, normalizing case and surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let normalized = s.as_ref().trim().to_lowercase();
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Returns the username string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("cannot be blank".to_string())
        } else if s.chars().count() > MAX_USERNAME_LEN {
            Some(format!(
                "must be at most {} characters long",
                MAX_USERNAME_LEN
            ))
        } else if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            Some("contains invalid characters".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::Username {
                value: s.to_string(),
                reason,
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Username {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
