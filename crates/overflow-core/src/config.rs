//! Listing configuration.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::listing::Resource;

const fn nz(n: u64) -> NonZeroU64 {
    match NonZeroU64::new(n) {
        Some(n) => n,
        None => NonZeroU64::MIN,
    }
}

/// Page sizes for the listing endpoints.
///
/// Built once at startup and passed by reference into every listing call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingConfig {
    /// Upper bound for any requested page size.
    pub max_limit: NonZeroU64,
    pub questions_limit: NonZeroU64,
    pub blogs_limit: NonZeroU64,
    pub users_limit: NonZeroU64,
    pub tags_limit: NonZeroU64,
    pub tagged_questions_limit: NonZeroU64,
    pub authored_limit: NonZeroU64,
    /// Number of tags returned by the popular-tags view.
    pub popular_tags: NonZeroU64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_limit: nz(100),
            questions_limit: nz(6),
            blogs_limit: nz(10),
            users_limit: nz(10),
            tags_limit: nz(10),
            tagged_questions_limit: nz(10),
            authored_limit: nz(10),
            popular_tags: nz(10),
        }
    }
}

impl ListingConfig {
    /// Page size used when a request for `resource` does not give one.
    pub fn default_limit(&self, resource: &Resource) -> NonZeroU64 {
        let limit = match resource {
            Resource::Questions => self.questions_limit,
            Resource::Blogs => self.blogs_limit,
            Resource::Users => self.users_limit,
            Resource::Tags => self.tags_limit,
            Resource::TaggedQuestions { .. } => self.tagged_questions_limit,
            Resource::AuthoredBy { .. } => self.authored_limit,
        };
        limit.min(self.max_limit)
    }

    /// Override the page size cap.
    pub fn with_max_limit(mut self, max_limit: NonZeroU64) -> Self {
        self.max_limit = max_limit;
        self
    }
}
