//! Blog subcommands.

mod list;
mod write;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args, Debug)]
pub struct BlogCommand {
    #[command(subcommand)]
    pub command: BlogSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BlogSubcommand {
    /// List blog posts, newest first
    List(list::ListBlogsArgs),

    /// List the posts of one user
    ByUser(list::ByUserArgs),

    /// Show a post (counts as a view)
    Show(list::ShowArgs),

    /// Write a post
    Create(write::CreateArgs),

    /// Rewrite one of your posts
    Edit(write::EditArgs),

    /// Delete one of your posts
    Remove(write::RemoveArgs),
}

pub async fn handle(cmd: BlogCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        BlogSubcommand::List(args) => list::list(args, ctx).await,
        BlogSubcommand::ByUser(args) => list::by_user(args, ctx).await,
        BlogSubcommand::Show(args) => list::show(args, ctx).await,
        BlogSubcommand::Create(args) => write::create(args, ctx).await,
        BlogSubcommand::Edit(args) => write::edit(args, ctx).await,
        BlogSubcommand::Remove(args) => write::remove(args, ctx).await,
    }
}
