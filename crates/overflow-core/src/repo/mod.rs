//! Documents and their typed views.
//!
//! Every document travels through the store as a [`Record`]; the service layer
//! converts records to and from the typed models in [`models`].

pub mod models;
mod record;
pub mod timestamp;

pub use models::{
    Blog, Follow, FollowState, Question, TagStat, User, UserProfile, Vote, VoteEntry,
};
pub use record::Record;
