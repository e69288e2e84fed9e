//! Block user command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::RecordId;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Id of the account to block
    pub id: String,
}

pub async fn run(args: BlockArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid user id")?;

    let profile = ctx
        .site
        .block_user(&claims, &id)
        .await
        .context("Failed to block user")?;

    output::success(&format!("Blocked {}", profile.username));
    Ok(())
}
