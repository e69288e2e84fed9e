use tracing::{info, instrument};

use crate::auth::{Claims, Credentials, require_admin};
use crate::error::{AuthError, Error};
use crate::listing::{ListQuery, PagedResult, Resource};
use crate::query::ListParams;
use crate::repo::models::{User, UserProfile};
use crate::repo::timestamp;
use crate::traits::{PasswordHasher, Store};
use crate::types::{Collection, RecordId, Role};
use crate::validation::{ProfileEdit, SignupDraft};
use crate::Result;

use super::Site;

impl<S: Store> Site<S> {
    /// Create an account.
    #[instrument(skip(self, draft, hasher))]
    pub async fn signup<H>(&self, draft: &SignupDraft, hasher: &H) -> Result<UserProfile>
    where
        H: PasswordHasher + ?Sized,
    {
        let (username, password) = draft.validate()?;

        if self.user_by_name(username.as_str()).await?.is_some() {
            return Err(Error::Conflict {
                message: "Username already exists.".to_string(),
            });
        }

        let id = RecordId::generate();
        let user = User {
            profile_photo: User::default_photo(&id),
            display_name: username.to_string(),
            id,
            username,
            profile: None,
            password_hash: hasher.hash(&password)?,
            role: Role::User,
            is_blocked: false,
            exp: None,
            created: timestamp::now(),
        };
        self.insert(Collection::Users, &user).await?;

        info!(id = %user.id, username = %user.username, "Created account");
        Ok(user.profile())
    }

    /// Check a username and password.
    ///
    /// Unknown users and wrong passwords get the same answer. Blocked
    /// accounts are refused before the password is checked.
    #[instrument(skip(self, credentials, hasher), fields(username = %credentials.username()))]
    pub async fn authenticate<H>(&self, credentials: &Credentials, hasher: &H) -> Result<UserProfile>
    where
        H: PasswordHasher + ?Sized,
    {
        let (username, password) =
            SignupDraft::new(credentials.username(), credentials.password()).validate()?;

        let user = self
            .user_by_name(username.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.is_blocked {
            return Err(AuthError::AccountBlocked.into());
        }

        if !hasher.verify(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.profile())
    }

    /// Rebuild the claims of a stored account, refusing blocked ones.
    pub async fn claims_for(&self, id: &RecordId) -> Result<Claims> {
        let user: User = self
            .load(Collection::Users, id, "user")
            .await
            .map_err(|e| match e {
                Error::NotFound { .. } => AuthError::InvalidToken {
                    reason: "account no longer exists".to_string(),
                }
                .into(),
                other => other,
            })?;

        if user.is_blocked {
            return Err(AuthError::AccountBlocked.into());
        }
        Ok(Claims::from(&user))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self, params: &ListParams) -> Result<PagedResult<UserProfile>> {
        let query = ListQuery::build(&Resource::Users, params, &self.config);
        self.list_as(&query).await
    }

    /// Users whose name contains `term`, case-insensitively.
    pub async fn search_users(
        &self,
        term: &str,
        params: &ListParams,
    ) -> Result<PagedResult<UserProfile>> {
        let params = params.clone().key(term);
        self.list_users(&params).await
    }

    pub async fn find_user(&self, username: &str) -> Result<UserProfile> {
        self.user_by_name(username)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| Error::not_found("user", username))
    }

    /// Update the caller's own display name, profile text and experience.
    ///
    /// Fields left out of `edit` keep their current value.
    #[instrument(skip(self, edit), fields(user = %claims.id))]
    pub async fn edit_user(&self, claims: &Claims, edit: &ProfileEdit) -> Result<UserProfile> {
        let edit = edit.validate()?;

        let user = self
            .modify(Collection::Users, &claims.id, "user", move |user: &mut User| {
                if let Some(display_name) = edit.display_name {
                    user.display_name = display_name;
                }
                if edit.profile.is_some() {
                    user.profile = edit.profile;
                }
                if edit.exp.is_some() {
                    user.exp = edit.exp;
                }
                Ok(())
            })
            .await?;

        info!("Updated profile");
        Ok(user.profile())
    }

    /// Block an account. Admin only.
    #[instrument(skip(self), fields(admin = %claims.id))]
    pub async fn block_user(&self, claims: &Claims, id: &RecordId) -> Result<UserProfile> {
        require_admin(claims)?;

        let user = self
            .modify(Collection::Users, id, "user", |user: &mut User| {
                user.is_blocked = true;
                Ok(())
            })
            .await?;

        info!(username = %user.username, "Blocked account");
        Ok(user.profile())
    }

    /// Change an account's role. An operator action with no caller check.
    #[instrument(skip(self))]
    pub async fn set_role(&self, username: &str, role: Role) -> Result<UserProfile> {
        let id = self
            .user_by_name(username)
            .await?
            .ok_or_else(|| Error::not_found("user", username))?
            .id;

        let user = self
            .modify(Collection::Users, &id, "user", move |user: &mut User| {
                user.role = role;
                Ok(())
            })
            .await?;

        info!(%role, "Changed role");
        Ok(user.profile())
    }
}
