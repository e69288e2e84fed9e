//! Typed document models.
//!
//! Field names serialize in camelCase (`isBlocked`, `displayName`), which is
//! also how filters and sorts address them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Role, Tag, Username};

use super::timestamp;

/// Field names shared by filters, sorts and the models below.
pub mod fields {
    pub const ID: &str = "id";
    pub const CREATED: &str = "created";
    pub const TITLE: &str = "title";
    pub const TEXT: &str = "text";
    pub const TAGS: &str = "tags";
    pub const AUTHOR: &str = "author";
    pub const SCORE: &str = "score";
    pub const VIEWS: &str = "views";
    pub const IS_BLOCKED: &str = "isBlocked";
    pub const USERNAME: &str = "username";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const NAME: &str = "name";
    pub const COUNT: &str = "count";
    pub const FOLLOWER: &str = "follower";
    pub const FOLLOWEE: &str = "followee";
}

/// A question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: RecordId,
    pub title: String,
    pub text: String,
    pub author: RecordId,
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub votes: Vec<VoteEntry>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

impl Question {
    /// Record `user`'s vote, replacing any earlier vote, and recompute the score.
    pub fn apply_vote(&mut self, user: &RecordId, vote: Vote) {
        self.votes.retain(|v| &v.user != user);
        if let Some(value) = vote.value() {
            self.votes.push(VoteEntry {
                user: user.clone(),
                vote: value,
            });
        }
        self.score = self.votes.iter().map(|v| i64::from(v.vote)).sum();
    }
}

/// One user's vote on a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub user: RecordId,
    pub vote: i8,
}

/// A vote action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
    Clear,
}

impl Vote {
    fn value(self) -> Option<i8> {
        match self {
            Vote::Up => Some(1),
            Vote::Down => Some(-1),
            Vote::Clear => None,
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    pub text: String,
    pub author: RecordId,
    #[serde(default)]
    pub views: u64,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

/// A stored user account, including its password hash.
///
/// Never hand this out directly; convert to [`UserProfile`] first.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: Username,
    pub display_name: String,
    #[serde(default)]
    pub profile: Option<String>,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    pub profile_photo: String,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub exp: Option<String>,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

impl User {
    /// Default avatar for a freshly created account.
    pub fn default_photo(id: &RecordId) -> String {
        format!(
            "https://secure.gravatar.com/avatar/{}?s=90&d=identicon",
            id
        )
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

// Keep the password hash out of Debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("is_blocked", &self.is_blocked)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// The public view of a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: RecordId,
    pub username: Username,
    pub display_name: String,
    #[serde(default)]
    pub profile: Option<String>,
    pub role: Role,
    pub profile_photo: String,
    pub is_blocked: bool,
    #[serde(default)]
    pub exp: Option<String>,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            profile: user.profile.clone(),
            role: user.role,
            profile_photo: user.profile_photo.clone(),
            is_blocked: user.is_blocked,
            exp: user.exp.clone(),
            created: user.created,
        }
    }
}

/// Usage counter for a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagStat {
    pub id: RecordId,
    pub name: Tag,
    pub count: u64,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

impl TagStat {
    /// The id of the counter for `tag`.
    pub fn id_for(tag: &Tag) -> RecordId {
        RecordId::derive(&format!("tag:{}", tag))
    }
}

/// A follow edge from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub id: RecordId,
    pub follower: RecordId,
    pub followee: RecordId,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
}

impl Follow {
    /// The id of the edge from `follower` to `followee`. There is at most one.
    pub fn id_for(follower: &RecordId, followee: &RecordId) -> RecordId {
        RecordId::derive(&format!("follow:{}:{}", follower, followee))
    }
}

/// Result of a follow toggle or lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub is_follow: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::Record;

    fn question() -> Question {
        Question {
            id: RecordId::new("q1").unwrap(),
            title: "Why does the borrow checker complain?".to_string(),
            text: "Some longer body text".to_string(),
            author: RecordId::new("u1").unwrap(),
            tags: vec![Tag::new("rust").unwrap()],
            score: 0,
            votes: Vec::new(),
            views: 0,
            is_blocked: false,
            created: timestamp::now(),
        }
    }

    #[test]
    fn votes_replace_and_clear() {
        let mut q = question();
        let alice = RecordId::new("alice").unwrap();
        let bob = RecordId::new("bob").unwrap();

        q.apply_vote(&alice, Vote::Up);
        q.apply_vote(&bob, Vote::Up);
        assert_eq!(q.score, 2);

        q.apply_vote(&alice, Vote::Down);
        assert_eq!(q.score, 0);

        q.apply_vote(&bob, Vote::Clear);
        assert_eq!(q.score, -1);
        assert_eq!(q.votes.len(), 1);
    }

    #[test]
    fn question_fields_are_camel_case() {
        let q = question();
        let record = Record::from_model(&q).unwrap();
        assert_eq!(record.get("isBlocked").unwrap(), false);
        assert!(record.get("is_blocked").is_none());

        let back: Question = record.to_model().unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn user_debug_hides_password_hash() {
        let user = User {
            id: RecordId::new("u1").unwrap(),
            username: Username::new("alice").unwrap(),
            display_name: "alice".to_string(),
            profile: None,
            password_hash: "$2b$12$secret".to_string(),
            role: Role::User,
            profile_photo: User::default_photo(&RecordId::new("u1").unwrap()),
            is_blocked: false,
            exp: None,
            created: timestamp::now(),
        };

        let debug = format!("{:?}", user);
        assert!(!debug.contains("$2b$12$secret"));
        assert!(debug.contains("[REDACTED]"));

        let profile = serde_json::to_value(user.profile()).unwrap();
        assert!(profile.get("passwordHash").is_none());
    }
}
