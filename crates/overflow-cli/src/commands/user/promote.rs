//! Promote command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::Role;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct PromoteArgs {
    /// Username to change
    pub username: String,

    /// Role to assign
    #[arg(long, default_value = "admin")]
    pub role: Role,
}

pub async fn run(args: PromoteArgs, ctx: &Context) -> Result<()> {
    let profile = ctx
        .site
        .set_role(&args.username, args.role)
        .await
        .context("Failed to change role")?;

    output::success(&format!("{} is now {}", profile.username, profile.role));
    Ok(())
}
