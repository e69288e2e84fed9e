//! List questions command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::commands::{Context, ListArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct ListQuestionsArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: ListQuestionsArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .site
        .list_questions(&args.list.params())
        .await
        .context("Failed to list questions")?;

    output::json(&page, args.list.pretty)
}
