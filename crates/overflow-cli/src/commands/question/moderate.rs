//! Remove and block commands.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::RecordId;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Question id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Question id
    pub id: String,
}

pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid question id")?;

    ctx.site
        .remove_question(&claims, &id)
        .await
        .context("Failed to remove question")?;

    output::success("Your question successfully deleted.");
    Ok(())
}

pub async fn block(args: BlockArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid question id")?;

    let question = ctx
        .site
        .block_question(&claims, &id)
        .await
        .context("Failed to block question")?;

    output::success(&format!("Blocked \"{}\"", question.title));
    Ok(())
}
