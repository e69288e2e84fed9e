//! Follow subcommands.
//!
//! Users are addressed by username here and resolved to ids before calling
//! the site.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use overflow_core::validation::FollowDraft;

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct FollowCommand {
    #[command(subcommand)]
    pub command: FollowSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FollowSubcommand {
    /// Follow a user, or unfollow if you already do
    Toggle(TargetArgs),

    /// Show whether you follow a user
    Status(TargetArgs),

    /// List the users someone follows
    List(ListFollowingArgs),
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Username of the other user
    pub username: String,
}

#[derive(Args, Debug)]
pub struct ListFollowingArgs {
    /// Whose follows to list
    pub username: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn handle(cmd: FollowCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        FollowSubcommand::Toggle(args) => {
            let claims = ctx.claims().await?;
            let followee = ctx
                .site
                .find_user(&args.username)
                .await
                .context("Failed to find user")?;

            let state = ctx
                .site
                .toggle_follow(&claims, &FollowDraft::new(followee.id.as_str()))
                .await
                .context("Failed to toggle follow")?;

            output::success(state.msg.as_deref().unwrap_or("Done"));
            output::field("Following", &state.is_follow.to_string());
            Ok(())
        }
        FollowSubcommand::Status(args) => {
            let claims = ctx.claims().await?;
            let followee = ctx
                .site
                .find_user(&args.username)
                .await
                .context("Failed to find user")?;

            let state = ctx
                .site
                .is_following(&claims, followee.id.as_str())
                .await
                .context("Failed to check follow")?;
            output::json(&state, false)
        }
        FollowSubcommand::List(args) => {
            let following = ctx
                .site
                .list_following(&args.username)
                .await
                .context("Failed to list follows")?;
            output::json(&following, args.pretty)
        }
    }
}
