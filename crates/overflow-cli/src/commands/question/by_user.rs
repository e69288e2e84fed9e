//! Per-user question listing.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::commands::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct ByUserArgs {
    /// Author's username
    pub username: String,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: ByUserArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .site
        .list_questions_by_user(&args.username, &args.list.params())
        .await
        .context("Failed to list questions")?;

    output::json(&page, args.list.pretty)
}
