use tracing::instrument;

use crate::listing::{ListQuery, PagedResult, Resource};
use crate::query::{Filter, FindQuery, ListParams, SortSpec};
use crate::repo::models::{TagStat, fields};
use crate::traits::Store;
use crate::types::Collection;
use crate::Result;

use super::Site;

impl<S: Store> Site<S> {
    /// Tags by usage, most used first.
    #[instrument(skip(self))]
    pub async fn list_tags(&self, params: &ListParams) -> Result<PagedResult<TagStat>> {
        let query = ListQuery::build(&Resource::Tags, params, &self.config);
        self.list_as(&query).await
    }

    /// Tags whose name contains `tag`.
    pub async fn search_tags(&self, tag: &str, params: &ListParams) -> Result<PagedResult<TagStat>> {
        let params = params.clone().key(tag);
        self.list_tags(&params).await
    }

    /// The most used tags.
    #[instrument(skip(self))]
    pub async fn popular_tags(&self) -> Result<Vec<TagStat>> {
        let query = FindQuery {
            limit: Some(self.config.popular_tags.get()),
            ..FindQuery::all(Filter::All, SortSpec::desc(fields::COUNT))
        };
        self.store
            .find(Collection::Tags, &query)
            .await?
            .iter()
            .map(|record| record.to_model())
            .collect()
    }
}
