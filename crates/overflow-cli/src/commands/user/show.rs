//! Show user command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Username to look up
    pub username: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let profile = ctx
        .site
        .find_user(&args.username)
        .await
        .context("Failed to find user")?;

    output::json(&profile, args.pretty)
}
