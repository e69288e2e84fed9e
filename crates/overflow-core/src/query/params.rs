//! Raw listing parameters as they arrive from a request.

use serde::{Deserialize, Serialize};

/// Raw, unvalidated listing parameters.
///
/// Every field is optional and kept as the string the caller sent; turning
/// them into numbers and sort specs happens once, in
/// [`ListQuery::build`](crate::listing::ListQuery::build).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Free-text search term.
    pub key: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// Sort field, `-` prefixed for descending.
    pub sort_type: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn sort_type(mut self, sort_type: impl Into<String>) -> Self {
        self.sort_type = Some(sort_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_query_string_names() {
        let params: ListParams =
            serde_json::from_str(r#"{"key": "rust", "page": "2", "sortType": "-score"}"#).unwrap();
        assert_eq!(params.key.as_deref(), Some("rust"));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.limit, None);
        assert_eq!(params.sort_type.as_deref(), Some("-score"));
    }
}
