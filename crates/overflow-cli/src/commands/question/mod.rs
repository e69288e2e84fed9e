//! Question subcommands.

mod by_user;
mod create;
mod list;
mod moderate;
mod show;
mod tagged;
mod vote;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args, Debug)]
pub struct QuestionCommand {
    #[command(subcommand)]
    pub command: QuestionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum QuestionSubcommand {
    /// List questions, newest first, hiding blocked ones
    List(list::ListQuestionsArgs),

    /// List questions carrying every given tag
    Tagged(tagged::TaggedArgs),

    /// List the questions of one user
    ByUser(by_user::ByUserArgs),

    /// Show a question (counts as a view)
    Show(show::ShowArgs),

    /// Post a question
    Create(create::CreateArgs),

    /// Delete one of your questions (or any, as admin)
    Remove(moderate::RemoveArgs),

    /// Block a question (admin)
    Block(moderate::BlockArgs),

    /// Vote on a question
    Vote(vote::VoteArgs),
}

pub async fn handle(cmd: QuestionCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        QuestionSubcommand::List(args) => list::run(args, ctx).await,
        QuestionSubcommand::Tagged(args) => tagged::run(args, ctx).await,
        QuestionSubcommand::ByUser(args) => by_user::run(args, ctx).await,
        QuestionSubcommand::Show(args) => show::run(args, ctx).await,
        QuestionSubcommand::Create(args) => create::run(args, ctx).await,
        QuestionSubcommand::Remove(args) => moderate::remove(args, ctx).await,
        QuestionSubcommand::Block(args) => moderate::block(args, ctx).await,
        QuestionSubcommand::Vote(args) => vote::run(args, ctx).await,
    }
}
