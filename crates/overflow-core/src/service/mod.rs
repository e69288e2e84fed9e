//! The site facade: question, blog, user, tag and follow operations.
//!
//! Every operation is a method on [`Site`], generic over the [`Store`] it runs
//! against. Operations that need a caller take already verified [`Claims`];
//! checking the token is the job of [`require_auth`](crate::auth::require_auth).
//!
//! [`Claims`]: crate::auth::Claims

mod blogs;
mod follows;
mod questions;
mod tags;
mod users;

use std::num::NonZeroU64;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ListingConfig;
use crate::error::Error;
use crate::listing::{self, ListQuery, PagedResult};
use crate::query::{Filter, ListParams, PageRequest};
use crate::repo::Record;
use crate::repo::models::{User, fields};
use crate::traits::{Mutation, Store};
use crate::types::{Collection, RecordId, Username};
use crate::Result;

/// The Q&A site over a document store.
#[derive(Debug)]
pub struct Site<S> {
    store: S,
    config: ListingConfig,
}

impl<S: Store> Site<S> {
    /// Create a site with the default listing configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ListingConfig::default())
    }

    pub fn with_config(store: S, config: ListingConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Load a typed document, or a not-found error naming `kind`.
    async fn load<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &RecordId,
        kind: &'static str,
    ) -> Result<T> {
        self.store
            .get(collection, id)
            .await?
            .ok_or_else(|| Error::not_found(kind, id.as_str()))?
            .to_model()
    }

    async fn insert<T: Serialize>(&self, collection: Collection, model: &T) -> Result<()> {
        self.store.insert(collection, Record::from_model(model)?).await
    }

    /// Edit a typed document through [`Store::update`], so concurrent writers
    /// cannot interleave between the read and the write. An error from `edit`
    /// leaves the document as it was.
    async fn modify<T, F>(
        &self,
        collection: Collection,
        id: &RecordId,
        kind: &'static str,
        edit: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce(&mut T) -> Result<()> + Send + 'static,
    {
        self.try_modify(collection, id, edit)
            .await?
            .ok_or_else(|| Error::not_found(kind, id.as_str()))
    }

    /// Like [`Site::modify`], but a missing document is `None`.
    async fn try_modify<T, F>(
        &self,
        collection: Collection,
        id: &RecordId,
        edit: F,
    ) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce(&mut T) -> Result<()> + Send + 'static,
    {
        let mutate: Mutation = Box::new(move |record: &mut Record| {
            let mut model: T = record.to_model()?;
            edit(&mut model)?;
            *record = Record::from_model(&model)?;
            Ok(())
        });

        self.store
            .update(collection, id, mutate)
            .await?
            .map(|record| record.to_model())
            .transpose()
    }

    /// The envelope of a listing that cannot match anything, paged as the
    /// request asked.
    fn empty_page<T>(&self, default_limit: NonZeroU64, params: &ListParams) -> PagedResult<T> {
        PagedResult::empty(PageRequest::from_raw(
            params.page.as_deref(),
            params.limit.as_deref(),
            default_limit,
            self.config.max_limit,
        ))
    }

    /// Run a listing and decode every record.
    async fn list_as<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<PagedResult<T>> {
        listing::list(&self.store, query)
            .await?
            .try_map(|record| record.to_model())
    }

    /// Look up a user by username. Malformed names simply match nobody.
    async fn user_by_name(&self, username: &str) -> Result<Option<User>> {
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };
        self.store
            .find_one(Collection::Users, &Filter::eq(fields::USERNAME, username.as_str()))
            .await?
            .map(|record| record.to_model())
            .transpose()
    }
}
