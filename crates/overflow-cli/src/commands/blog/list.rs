//! Read-only blog commands.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::RecordId;

use crate::commands::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct ListBlogsArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct ByUserArgs {
    /// Author's username
    pub username: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Blog post id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn list(args: ListBlogsArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .site
        .list_blogs(&args.list.params())
        .await
        .context("Failed to list blog posts")?;

    output::json(&page, args.list.pretty)
}

pub async fn by_user(args: ByUserArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .site
        .list_blogs_by_user(&args.username, &args.list.params())
        .await
        .context("Failed to list blog posts")?;

    output::json(&page, args.list.pretty)
}

pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid blog id")?;
    let blog = ctx
        .site
        .show_blog(&id)
        .await
        .context("Failed to load blog post")?;

    output::json(&blog, args.pretty)
}
