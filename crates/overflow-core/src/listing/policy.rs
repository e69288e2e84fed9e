//! Per-resource listing policies.

use crate::query::{Filter, SortSpec};
use crate::repo::models::fields;
use crate::types::{Collection, RecordId, Tag};

/// What is being listed.
///
/// Each variant fixes the collection, the default sort, the fields a free-text
/// key is matched against and any standing filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Questions,
    Blogs,
    Users,
    Tags,
    /// Questions carrying every one of `tags`.
    TaggedQuestions { tags: Vec<Tag> },
    /// Documents in `collection` written by `author`.
    AuthoredBy {
        collection: Collection,
        author: RecordId,
    },
}

impl Resource {
    pub fn collection(&self) -> Collection {
        match self {
            Resource::Questions | Resource::TaggedQuestions { .. } => Collection::Questions,
            Resource::Blogs => Collection::Blogs,
            Resource::Users => Collection::Users,
            Resource::Tags => Collection::Tags,
            Resource::AuthoredBy { collection, .. } => *collection,
        }
    }

    /// Sort applied when the request carries no usable `sortType`.
    pub fn default_sort(&self) -> SortSpec {
        match self {
            Resource::Tags => SortSpec::desc(fields::COUNT),
            Resource::TaggedQuestions { .. } => SortSpec::desc(fields::SCORE),
            _ => SortSpec::desc(fields::CREATED),
        }
    }

    /// Fields a free-text key is matched against.
    pub fn search_fields(&self) -> &'static [&'static str] {
        match self {
            Resource::Users => &[fields::USERNAME],
            Resource::Tags => &[fields::NAME],
            _ => &[fields::TITLE, fields::TEXT],
        }
    }

    /// Fields a request may sort by. Anything else falls back to
    /// [`Resource::default_sort`].
    pub fn sortable_fields(&self) -> &'static [&'static str] {
        match self.collection() {
            Collection::Questions => {
                &[fields::CREATED, fields::SCORE, fields::VIEWS, fields::TITLE]
            }
            Collection::Blogs => &[fields::CREATED, fields::VIEWS, fields::TITLE],
            Collection::Users => &[fields::CREATED, fields::USERNAME, fields::DISPLAY_NAME],
            Collection::Tags => &[fields::COUNT, fields::NAME, fields::CREATED],
            Collection::Follows => &[fields::CREATED],
        }
    }

    /// The standing filter of this resource, before any key or call-site
    /// condition.
    pub fn scope(&self) -> Filter {
        match self {
            Resource::TaggedQuestions { tags } => Filter::tagged_with_all(tags),
            Resource::AuthoredBy { author, .. } => Filter::authored_by(author),
            _ => Filter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_questions_default_to_score() {
        let resource = Resource::TaggedQuestions {
            tags: Tag::parse_list("a,b").unwrap(),
        };
        assert_eq!(resource.collection(), Collection::Questions);
        assert_eq!(resource.default_sort(), SortSpec::desc("score"));
        assert!(matches!(resource.scope(), Filter::ContainsAll { .. }));
    }

    #[test]
    fn search_fields_per_resource() {
        assert_eq!(Resource::Questions.search_fields(), &["title", "text"]);
        assert_eq!(Resource::Users.search_fields(), &["username"]);
        assert_eq!(Resource::Tags.search_fields(), &["name"]);
        assert_eq!(Resource::Tags.default_sort(), SortSpec::desc("count"));
    }

    #[test]
    fn sortable_fields_follow_the_collection() {
        assert!(Resource::Users.sortable_fields().contains(&"username"));
        assert!(!Resource::Users.sortable_fields().contains(&"passwordHash"));

        let tagged = Resource::TaggedQuestions { tags: Vec::new() };
        assert_eq!(tagged.sortable_fields(), Resource::Questions.sortable_fields());
        for resource in [Resource::Questions, Resource::Blogs, Resource::Users, Resource::Tags] {
            let default = resource.default_sort();
            assert!(resource.sortable_fields().contains(&default.field()));
        }
    }

    #[test]
    fn authored_by_scopes_to_author() {
        let author = RecordId::new("u1").unwrap();
        let resource = Resource::AuthoredBy {
            collection: Collection::Blogs,
            author: author.clone(),
        };
        assert_eq!(resource.collection(), Collection::Blogs);
        assert_eq!(resource.scope(), Filter::authored_by(&author));
        assert_eq!(Resource::Blogs.scope(), Filter::All);
    }
}
