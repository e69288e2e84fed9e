//! Filter predicates over records.

use serde_json::Value;

use crate::repo::Record;
use crate::repo::models::fields;
use crate::types::{RecordId, Tag};

/// A predicate selecting a subset of records.
///
/// Filters are plain data: stores may translate them into their own query
/// language, or evaluate them in process with [`Filter::matches`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Filter {
    /// Matches every record.
    #[default]
    All,
    /// Case-insensitive substring match on a string field.
    TextContains { field: String, needle: String },
    /// Exact equality on a field.
    Eq { field: String, value: Value },
    /// The array field contains every one of `values`. An empty `values`
    /// matches nothing.
    ContainsAll { field: String, values: Vec<Value> },
    /// Every inner filter matches.
    And(Vec<Filter>),
    /// At least one inner filter matches.
    Or(Vec<Filter>),
}

impl Filter {
    /// Free-text search of `key` across `fields`, OR'd together.
    ///
    /// An absent or blank key yields [`Filter::All`].
    pub fn text_search(fields: &[&str], key: Option<&str>) -> Self {
        let key = match key.map(str::trim) {
            Some(k) if !k.is_empty() => k,
            _ => return Filter::All,
        };

        let mut terms: Vec<Filter> = fields
            .iter()
            .map(|field| Filter::TextContains {
                field: field.to_string(),
                needle: key.to_string(),
            })
            .collect();

        match terms.len() {
            0 => Filter::All,
            1 => terms.remove(0),
            _ => Filter::Or(terms),
        }
    }

    /// Equality on a field.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Records that are not blocked by a moderator.
    pub fn not_blocked() -> Self {
        Filter::eq(fields::IS_BLOCKED, false)
    }

    /// Records authored by `author`.
    pub fn authored_by(author: &RecordId) -> Self {
        Filter::eq(fields::AUTHOR, author.as_str())
    }

    /// Records whose tag set is a superset of `tags`.
    ///
    /// An empty tag list matches nothing.
    pub fn tagged_with_all(tags: &[Tag]) -> Self {
        Filter::ContainsAll {
            field: fields::TAGS.to_string(),
            values: tags.iter().map(|t| Value::from(t.as_str())).collect(),
        }
    }

    /// Conjunction of `self` and `other`, flattening nested ANDs and
    /// dropping [`Filter::All`] terms.
    pub fn and(self, other: Filter) -> Self {
        let mut terms = Vec::new();
        for filter in [self, other] {
            match filter {
                Filter::All => {}
                Filter::And(inner) => terms.extend(inner),
                f => terms.push(f),
            }
        }

        match terms.len() {
            0 => Filter::All,
            1 => terms.remove(0),
            _ => Filter::And(terms),
        }
    }

    /// Returns true if the record satisfies this filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::All => true,
            Filter::TextContains { field, needle } => record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
            Filter::Eq { field, value } => record.get(field) == Some(value),
            Filter::ContainsAll { field, values } => match record.get(field) {
                Some(Value::Array(items)) => {
                    !values.is_empty() && values.iter().all(|v| items.contains(v))
                }
                _ => false,
            },
            Filter::And(terms) => terms.iter().all(|f| f.matches(record)),
            Filter::Or(terms) => terms.iter().any(|f| f.matches(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(title: &str, text: &str, tags: &[&str], blocked: bool) -> Record {
        Record::new(json!({
            "id": "r1",
            "created": "2024-01-01T00:00:00.000000Z",
            "title": title,
            "text": text,
            "tags": tags,
            "isBlocked": blocked,
        }))
        .unwrap()
    }

    #[test]
    fn blank_key_matches_everything() {
        assert_eq!(Filter::text_search(&["title"], None), Filter::All);
        assert_eq!(Filter::text_search(&["title"], Some("")), Filter::All);
        assert_eq!(Filter::text_search(&["title"], Some("   ")), Filter::All);
    }

    #[test]
    fn text_search_is_case_insensitive_across_fields() {
        let filter = Filter::text_search(&["title", "text"], Some("foo"));

        assert!(filter.matches(&record("All about FOO", "", &[], false)));
        assert!(filter.matches(&record("Untitled", "a Foobar appears", &[], false)));
        assert!(!filter.matches(&record("Untitled", "nothing here", &[], false)));
    }

    #[test]
    fn key_is_matched_literally() {
        let filter = Filter::text_search(&["title"], Some("c++ (part"));
        assert!(filter.matches(&record("Learning C++ (part 2)", "", &[], false)));
        assert!(!filter.matches(&record("Learning C", "", &[], false)));
    }

    #[test]
    fn contains_all_requires_superset() {
        let tags = Tag::parse_list("a,b").unwrap();
        let filter = Filter::tagged_with_all(&tags);

        assert!(filter.matches(&record("", "", &["a", "b", "c"], false)));
        assert!(!filter.matches(&record("", "", &["a"], false)));
        assert!(!filter.matches(&record("", "", &[], false)));
    }

    #[test]
    fn empty_tag_list_matches_nothing() {
        let filter = Filter::tagged_with_all(&[]);

        assert!(!filter.matches(&record("", "", &["a"], false)));
        assert!(!filter.matches(&record("", "", &[], false)));
    }

    #[test]
    fn and_flattens_and_drops_all() {
        let combined = Filter::All.and(Filter::not_blocked());
        assert_eq!(combined, Filter::not_blocked());

        let search = Filter::text_search(&["title"], Some("x"));
        let nested = search.clone().and(Filter::not_blocked()).and(Filter::All);
        assert_eq!(nested, Filter::And(vec![search, Filter::not_blocked()]));
    }

    #[test]
    fn not_blocked_excludes_blocked_records() {
        let filter = Filter::not_blocked();
        assert!(filter.matches(&record("", "", &[], false)));
        assert!(!filter.matches(&record("", "", &[], true)));
    }
}
