//! Tag subcommands.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct TagCommand {
    #[command(subcommand)]
    pub command: TagSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TagSubcommand {
    /// List tags, most used first
    List(ListTagsArgs),

    /// Find tags by name
    Search(SearchArgs),

    /// Show the most used tags
    Popular(PopularArgs),
}

#[derive(Args, Debug)]
pub struct ListTagsArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Part of a tag name
    pub tag: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct PopularArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn handle(cmd: TagCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        TagSubcommand::List(args) => {
            let page = ctx
                .site
                .list_tags(&args.list.params())
                .await
                .context("Failed to list tags")?;
            output::json(&page, args.list.pretty)
        }
        TagSubcommand::Search(args) => {
            let page = ctx
                .site
                .search_tags(&args.tag, &args.list.params())
                .await
                .context("Failed to search tags")?;
            output::json(&page, args.list.pretty)
        }
        TagSubcommand::Popular(args) => {
            let tags = ctx
                .site
                .popular_tags()
                .await
                .context("Failed to load popular tags")?;
            output::json(&tags, args.pretty)
        }
    }
}
