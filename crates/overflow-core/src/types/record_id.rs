//! Record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, InvalidInputError};

const MAX_LEN: usize = 64;

/// A validated document identifier.
///
/// Identifiers double as file names in the file-backed store, so they are
/// restricted to ASCII letters, digits, `-` and `_`.
///
/// # Example
///
/// ```
/// use overflow_core::RecordId;
///
/// let id = RecordId::new("5f1d7c9e8a").unwrap();
/// assert_eq!(id.as_str(), "5f1d7c9e8a");
/// assert!(RecordId::new("../etc/passwd").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Create a record id from a string, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// A stable identifier for `name`: the same name always gives the same id.
    ///
    /// Lets a document be keyed by its natural identity, so a concurrent
    /// second insert fails as a duplicate.
    pub fn derive(name: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).simple().to_string())
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("cannot be empty".to_string())
        } else if s.len() > MAX_LEN {
            Some(format!("exceeds maximum length of {} characters", MAX_LEN))
        } else {
            s.chars()
                .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
                .map(|c| format!("contains invalid character '{}'", c))
        };

        match reason {
            Some(reason) => Err(InvalidInputError::RecordId {
                value: s.to_string(),
                reason,
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
