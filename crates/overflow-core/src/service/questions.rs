use tracing::{debug, info, instrument};

use crate::auth::{Claims, require_admin, require_owner_or_admin};
use crate::error::{Error, StoreError};
use crate::listing::{ListQuery, PagedResult, Resource};
use crate::query::{Filter, ListParams};
use crate::repo::models::{Question, TagStat, Vote};
use crate::repo::timestamp;
use crate::traits::Store;
use crate::types::{Collection, RecordId, Tag};
use crate::validation::QuestionDraft;
use crate::Result;

use super::Site;

impl<S: Store> Site<S> {
    /// Post a question and count its tags.
    #[instrument(skip(self, draft), fields(author = %claims.id))]
    pub async fn create_question(&self, claims: &Claims, draft: &QuestionDraft) -> Result<Question> {
        let new = draft.validate()?;

        let question = Question {
            id: RecordId::generate(),
            title: new.title,
            text: new.text,
            author: claims.id.clone(),
            tags: new.tags,
            score: 0,
            votes: Vec::new(),
            views: 0,
            is_blocked: false,
            created: timestamp::now(),
        };
        self.insert(Collection::Questions, &question).await?;

        for tag in &question.tags {
            self.adjust_tag(tag, 1).await?;
        }

        info!(id = %question.id, "Created question");
        Ok(question)
    }

    /// Fetch a question, counting the view.
    #[instrument(skip(self))]
    pub async fn show_question(&self, id: &RecordId) -> Result<Question> {
        self.modify(Collection::Questions, id, "question", |question: &mut Question| {
            question.views += 1;
            Ok(())
        })
        .await
    }

    /// Newest questions first, excluding blocked ones.
    #[instrument(skip(self))]
    pub async fn list_questions(&self, params: &ListParams) -> Result<PagedResult<Question>> {
        let query = ListQuery::build(&Resource::Questions, params, &self.config)
            .and_filter(Filter::not_blocked());
        self.list_as(&query).await
    }

    /// Questions carrying every tag of the comma-separated `tags`.
    ///
    /// A list with no tags, or with a label no question could carry, matches
    /// nothing.
    #[instrument(skip(self))]
    pub async fn list_by_tags(
        &self,
        tags: &str,
        params: &ListParams,
    ) -> Result<PagedResult<Question>> {
        let tags = match Tag::parse_list(tags) {
            Ok(tags) if !tags.is_empty() => tags,
            _ => {
                debug!("No usable tags, returning an empty page");
                return Ok(self.empty_page(self.config.tagged_questions_limit, params));
            }
        };

        let resource = Resource::TaggedQuestions { tags };
        let query = ListQuery::build(&resource, params, &self.config);
        self.list_as(&query).await
    }

    /// Questions written by `username`. An unknown author has none.
    #[instrument(skip(self))]
    pub async fn list_questions_by_user(
        &self,
        username: &str,
        params: &ListParams,
    ) -> Result<PagedResult<Question>> {
        self.list_authored(Collection::Questions, username, params).await
    }

    /// Delete a question. Only its author or an admin may.
    #[instrument(skip(self), fields(user = %claims.id))]
    pub async fn remove_question(&self, claims: &Claims, id: &RecordId) -> Result<()> {
        let question: Question = self.load(Collection::Questions, id, "question").await?;
        require_owner_or_admin(claims, &question.author)?;

        self.store.delete(Collection::Questions, id).await?;
        for tag in &question.tags {
            self.adjust_tag(tag, -1).await?;
        }

        info!("Removed question");
        Ok(())
    }

    /// Hide a question from the public listing. Admin only.
    #[instrument(skip(self), fields(admin = %claims.id))]
    pub async fn block_question(&self, claims: &Claims, id: &RecordId) -> Result<Question> {
        require_admin(claims)?;

        let question = self
            .modify(Collection::Questions, id, "question", |question: &mut Question| {
                question.is_blocked = true;
                Ok(())
            })
            .await?;

        info!("Blocked question");
        Ok(question)
    }

    /// Cast, change or withdraw the caller's vote.
    #[instrument(skip(self), fields(user = %claims.id))]
    pub async fn vote(&self, claims: &Claims, id: &RecordId, vote: Vote) -> Result<Question> {
        let voter = claims.id.clone();
        let question = self
            .modify(Collection::Questions, id, "question", move |question: &mut Question| {
                question.apply_vote(&voter, vote);
                Ok(())
            })
            .await?;

        debug!(score = question.score, "Recorded vote");
        Ok(question)
    }

    /// Shared by the per-author question and blog listings.
    pub(super) async fn list_authored<T>(
        &self,
        collection: Collection,
        username: &str,
        params: &ListParams,
    ) -> Result<PagedResult<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let Some(author) = self.user_by_name(username).await?.map(|user| user.id) else {
            debug!("Unknown author, returning an empty page");
            return Ok(self.empty_page(self.config.authored_limit, params));
        };

        let resource = Resource::AuthoredBy { collection, author };
        let query = ListQuery::build(&resource, params, &self.config);
        self.list_as(&query).await
    }

    /// Move a tag's usage counter by `delta`, creating it on first use.
    async fn adjust_tag(&self, tag: &Tag, delta: i64) -> Result<()> {
        let id = TagStat::id_for(tag);
        let bump = move |stat: &mut TagStat| {
            stat.count = stat.count.saturating_add_signed(delta);
            Ok(())
        };

        if self.try_modify(Collection::Tags, &id, bump).await?.is_some() || delta <= 0 {
            return Ok(());
        }

        let stat = TagStat {
            id,
            name: tag.clone(),
            count: delta.unsigned_abs(),
            created: timestamp::now(),
        };
        match self.insert(Collection::Tags, &stat).await {
            // Created by another writer since the update above.
            Err(Error::Store(StoreError::Duplicate { .. })) => {
                self.modify(Collection::Tags, &stat.id, "tag", bump).await.map(drop)
            }
            other => other,
        }
    }
}
