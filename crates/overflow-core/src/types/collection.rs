//! Document collections.

use std::fmt;

/// A named collection of documents in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Questions,
    Blogs,
    Users,
    Tags,
    Follows,
}

impl Collection {
    /// Every collection, in a stable order.
    pub const ALL: [Collection; 5] = [
        Collection::Questions,
        Collection::Blogs,
        Collection::Users,
        Collection::Tags,
        Collection::Follows,
    ];

    /// Returns the collection name, also used as its directory name on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::Blogs => "blogs",
            Collection::Users => "users",
            Collection::Tags => "tags",
            Collection::Follows => "follows",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
