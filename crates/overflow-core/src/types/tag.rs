//! Tag label type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

const MAX_TAG_LEN: usize = 35;

/// A validated tag label (lowercase, no whitespace).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Create a tag, normalizing case and surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let normalized = s.as_ref().trim().to_lowercase();

        let reason = if normalized.is_empty() {
            Some("cannot be blank".to_string())
        } else if normalized.chars().count() > MAX_TAG_LEN {
            Some(format!("must be at most {} characters long", MAX_TAG_LEN))
        } else if normalized.chars().any(char::is_whitespace) {
            Some("cannot contain whitespace".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(InvalidInputError::Tag {
                value: s.as_ref().to_string(),
                reason,
            }
            .into());
        }

        Ok(Self(normalized))
    }

    /// Parse a comma-separated tag list, as carried in a route segment.
    ///
    /// Empty segments are skipped and duplicates collapse.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, Error> {
        let mut tags: Vec<Self> = s
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(Self::new)
            .collect::<Result<_, _>>()?;
        tags.sort();
        tags.dedup();
        Ok(tags)
    }

    /// Returns the tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}
