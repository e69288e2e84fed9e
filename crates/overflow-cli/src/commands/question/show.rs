//! Show question command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::RecordId;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Question id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid question id")?;
    let question = ctx
        .site
        .show_question(&id)
        .await
        .context("Failed to load question")?;

    output::json(&question, args.pretty)
}
