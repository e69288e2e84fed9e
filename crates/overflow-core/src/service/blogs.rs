use tracing::{info, instrument};

use crate::auth::{Claims, require_owner_or_admin};
use crate::listing::{ListQuery, PagedResult, Resource};
use crate::query::ListParams;
use crate::repo::models::Blog;
use crate::repo::timestamp;
use crate::traits::Store;
use crate::types::{Collection, RecordId};
use crate::validation::BlogDraft;
use crate::Result;

use super::Site;

impl<S: Store> Site<S> {
    #[instrument(skip(self, draft), fields(author = %claims.id))]
    pub async fn create_blog(&self, claims: &Claims, draft: &BlogDraft) -> Result<Blog> {
        let new = draft.validate()?;

        let blog = Blog {
            id: RecordId::generate(),
            title: new.title,
            text: new.text,
            author: claims.id.clone(),
            views: 0,
            created: timestamp::now(),
        };
        self.insert(Collection::Blogs, &blog).await?;

        info!(id = %blog.id, "Created blog post");
        Ok(blog)
    }

    /// Fetch a blog post, counting the view.
    #[instrument(skip(self))]
    pub async fn show_blog(&self, id: &RecordId) -> Result<Blog> {
        self.modify(Collection::Blogs, id, "blog", |blog: &mut Blog| {
            blog.views += 1;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_blogs(&self, params: &ListParams) -> Result<PagedResult<Blog>> {
        let query = ListQuery::build(&Resource::Blogs, params, &self.config);
        self.list_as(&query).await
    }

    /// Replace a post's title and text. Only its author or an admin may.
    #[instrument(skip(self, draft), fields(user = %claims.id))]
    pub async fn edit_blog(&self, claims: &Claims, id: &RecordId, draft: &BlogDraft) -> Result<Blog> {
        let current: Blog = self.load(Collection::Blogs, id, "blog").await?;
        require_owner_or_admin(claims, &current.author)?;
        let new = draft.validate()?;

        let blog = self
            .modify(Collection::Blogs, id, "blog", move |blog: &mut Blog| {
                blog.title = new.title;
                blog.text = new.text;
                Ok(())
            })
            .await?;

        info!("Edited blog post");
        Ok(blog)
    }

    /// Delete a blog post. Only its author or an admin may.
    #[instrument(skip(self), fields(user = %claims.id))]
    pub async fn remove_blog(&self, claims: &Claims, id: &RecordId) -> Result<()> {
        let blog: Blog = self.load(Collection::Blogs, id, "blog").await?;
        require_owner_or_admin(claims, &blog.author)?;

        self.store.delete(Collection::Blogs, id).await?;
        info!("Removed blog post");
        Ok(())
    }

    /// Blog posts written by `username`. An unknown author has none.
    #[instrument(skip(self))]
    pub async fn list_blogs_by_user(
        &self,
        username: &str,
        params: &ListParams,
    ) -> Result<PagedResult<Blog>> {
        self.list_authored(Collection::Blogs, username, params).await
    }
}
