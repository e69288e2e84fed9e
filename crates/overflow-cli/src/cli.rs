//! CLI argument definitions.

use std::num::NonZeroU64;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{blog, follow, question, tag, user};

/// Operator tool for a file-backed overflow site.
#[derive(Parser, Debug)]
#[command(name = "overflow")]
#[command(author, version = env!("OVERFLOW_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the site lives and how it is configured.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Data directory of the file store
    #[arg(long, env = "OVERFLOW_DATA_DIR", default_value = "overflow-data", global = true)]
    pub data_dir: PathBuf,

    /// bcrypt work factor for new passwords
    #[arg(long, env = "OVERFLOW_BCRYPT_COST", default_value_t = 12, global = true)]
    pub bcrypt_cost: u32,

    /// Largest page size a listing may request
    #[arg(long, env = "OVERFLOW_MAX_LIMIT", global = true)]
    pub max_limit: Option<NonZeroU64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Accounts and the local login
    User(user::UserCommand),

    /// Questions: listing, posting, moderation and votes
    Question(question::QuestionCommand),

    /// Blog posts
    Blog(blog::BlogCommand),

    /// Tag statistics
    Tag(tag::TagCommand),

    /// Follow relationships
    Follow(follow::FollowCommand),
}
