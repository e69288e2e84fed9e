use tracing::{info, instrument};

use crate::auth::Claims;
use crate::error::{Error, StoreError};
use crate::query::{Filter, FindQuery, SortSpec};
use crate::repo::Record;
use crate::repo::models::{Follow, FollowState, User, UserProfile, fields};
use crate::repo::timestamp;
use crate::traits::Store;
use crate::types::Collection;
use crate::validation::FollowDraft;
use crate::Result;

use super::Site;

impl<S: Store> Site<S> {
    /// Follow `followee`, or unfollow if the caller already does.
    #[instrument(skip(self, draft), fields(user = %claims.id))]
    pub async fn toggle_follow(&self, claims: &Claims, draft: &FollowDraft) -> Result<FollowState> {
        let followee = draft.validate()?;

        if self.store.get(Collection::Users, &followee).await?.is_none() {
            return Err(Error::not_found("user", followee.as_str()));
        }

        let id = Follow::id_for(&claims.id, &followee);
        if self.store.delete(Collection::Follows, &id).await? {
            info!(%followee, "Unfollowed");
            return Ok(FollowState {
                msg: Some("Successfully Unfollow".to_string()),
                is_follow: false,
            });
        }

        let follow = Follow {
            id,
            follower: claims.id.clone(),
            followee,
            created: timestamp::now(),
        };
        match self.insert(Collection::Follows, &follow).await {
            // Another writer added the same edge first.
            Ok(()) | Err(Error::Store(StoreError::Duplicate { .. })) => {}
            Err(err) => return Err(err),
        }

        info!(followee = %follow.followee, "Followed");
        Ok(FollowState {
            msg: Some("Successfully Follow".to_string()),
            is_follow: true,
        })
    }

    /// Whether the caller follows `followee`.
    pub async fn is_following(&self, claims: &Claims, followee: &str) -> Result<FollowState> {
        let followee = FollowDraft::new(followee).validate()?;
        let found = self
            .store
            .get(Collection::Follows, &Follow::id_for(&claims.id, &followee))
            .await?;

        Ok(FollowState {
            msg: None,
            is_follow: found.is_some(),
        })
    }

    /// Profiles followed by `username`, oldest follow first.
    ///
    /// An unknown user follows nobody.
    #[instrument(skip(self))]
    pub async fn list_following(&self, username: &str) -> Result<Vec<UserProfile>> {
        let Some(user) = self.user_by_name(username).await? else {
            return Ok(Vec::new());
        };

        let query = FindQuery::all(
            Filter::eq(fields::FOLLOWER, user.id.as_str()),
            SortSpec::asc(fields::CREATED),
        );
        let edges = self.store.find(Collection::Follows, &query).await?;

        let mut profiles = Vec::with_capacity(edges.len());
        for record in edges {
            let follow: Follow = record.to_model()?;
            if let Some(followee) = self.store.get(Collection::Users, &follow.followee).await? {
                profiles.push(followee_profile(&followee)?);
            }
        }
        Ok(profiles)
    }
}

fn followee_profile(record: &Record) -> Result<UserProfile> {
    let user: User = record.to_model()?;
    Ok(user.profile())
}
