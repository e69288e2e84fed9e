//! List users command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::commands::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct ListUsersArgs {
    /// Only users whose name contains this term
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: ListUsersArgs, ctx: &Context) -> Result<()> {
    let params = args.list.params();
    let page = match &args.search {
        Some(term) => ctx.site.search_users(term, &params).await,
        None => ctx.site.list_users(&params).await,
    }
    .context("Failed to list users")?;

    output::json(&page, args.list.pretty)
}
