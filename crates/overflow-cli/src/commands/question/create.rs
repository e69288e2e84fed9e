//! Create question command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::validation::QuestionDraft;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Question title
    #[arg(long)]
    pub title: String,

    /// Question body
    #[arg(long)]
    pub text: String,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',', required = true)]
    pub tags: Vec<String>,
}

pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let draft = QuestionDraft {
        title: Some(args.title),
        text: Some(args.text),
        tags: Some(args.tags),
    };

    let question = ctx
        .site
        .create_question(&claims, &draft)
        .await
        .context("Failed to create question")?;

    output::success("Question created");
    println!();
    output::field("ID", question.id.as_str());
    output::field("Title", &question.title);

    Ok(())
}
