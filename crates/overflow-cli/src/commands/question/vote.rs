//! Vote command implementation.

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};

use overflow_core::RecordId;
use overflow_core::repo::Vote;

use crate::commands::Context;
use crate::output;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Clear,
}

impl From<Direction> for Vote {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Vote::Up,
            Direction::Down => Vote::Down,
            Direction::Clear => Vote::Clear,
        }
    }
}

#[derive(Args, Debug)]
pub struct VoteArgs {
    /// Question id
    pub id: String,

    /// up, down or clear
    #[arg(value_enum)]
    pub direction: Direction,
}

pub async fn run(args: VoteArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let id = RecordId::new(&args.id).context("Invalid question id")?;

    let question = ctx
        .site
        .vote(&claims, &id, args.direction.into())
        .await
        .context("Failed to vote")?;

    output::success("Vote recorded");
    output::field("Score", &question.score.to_string());
    Ok(())
}
