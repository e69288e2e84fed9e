//! Validated listing queries.

use crate::config::ListingConfig;
use crate::query::{Filter, FindQuery, ListParams, PageRequest, SortSpec};
use crate::types::Collection;

use super::Resource;

/// A validated, immutable listing query.
///
/// All permissive coercion of raw parameters happens in [`ListQuery::build`];
/// nothing downstream re-parses strings.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    collection: Collection,
    filter: Filter,
    sort: SortSpec,
    page: PageRequest,
}

impl ListQuery {
    /// Build a query for `resource` from raw request parameters.
    ///
    /// Unusable `page`, `limit` or `sortType` values fall back to defaults
    /// silently, as does a sort on a field the resource does not allow. An
    /// absent or blank `key` adds no text condition.
    pub fn build(resource: &Resource, params: &ListParams, config: &ListingConfig) -> Self {
        let page = PageRequest::from_raw(
            params.page.as_deref(),
            params.limit.as_deref(),
            config.default_limit(resource),
            config.max_limit,
        );

        let sort = params
            .sort_type
            .as_deref()
            .and_then(SortSpec::parse)
            .filter(|sort| resource.sortable_fields().contains(&sort.field()))
            .unwrap_or_else(|| resource.default_sort());

        let filter = Filter::text_search(resource.search_fields(), params.key.as_deref())
            .and(resource.scope());

        Self {
            collection: resource.collection(),
            filter,
            sort,
            page,
        }
    }

    /// AND an extra condition onto the filter.
    pub fn and_filter(mut self, filter: Filter) -> Self {
        self.filter = self.filter.and(filter);
        self
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// The store fetch for this page.
    pub fn find_query(&self) -> FindQuery {
        FindQuery {
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            skip: self.page.skip(),
            limit: Some(self.page.limit()),
        }
    }
}
