//! Tagged questions command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::commands::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct TaggedArgs {
    /// Comma-separated tags, all of which must be present
    pub tags: String,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: TaggedArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .site
        .list_by_tags(&args.tags, &args.list.params())
        .await
        .context("Failed to list tagged questions")?;

    output::json(&page, args.list.pretty)
}
