//! Blog commands that change posts.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::RecordId;
use overflow_core::validation::BlogDraft;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// Post body
    #[arg(long)]
    pub text: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Blog post id
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: String,

    /// New body
    #[arg(long)]
    pub text: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Blog post id
    pub id: String,
}

pub async fn create(args: CreateArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let draft = BlogDraft {
        title: Some(args.title),
        text: Some(args.text),
    };

    let blog = ctx
        .site
        .create_blog(&claims, &draft)
        .await
        .context("Failed to create blog post")?;

    output::success("Blog post created");
    println!();
    output::field("ID", blog.id.as_str());
    output::field("Title", &blog.title);
    Ok(())
}

pub async fn edit(args: EditArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid blog id")?;
    let draft = BlogDraft {
        title: Some(args.title),
        text: Some(args.text),
    };

    let blog = ctx
        .site
        .edit_blog(&claims, &id, &draft)
        .await
        .context("Failed to edit blog post")?;

    output::success("Blog post updated");
    output::field("Title", &blog.title);
    Ok(())
}

pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid blog id")?;

    ctx.site
        .remove_blog(&claims, &id)
        .await
        .context("Failed to remove blog post")?;

    output::success("Blog post deleted");
    Ok(())
}
