//! User subcommands.

mod block;
mod edit;
mod list;
mod login;
mod logout;
mod promote;
mod show;
mod signup;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Create an account
    Signup(signup::SignupArgs),

    /// Log in and remember the account
    Login(login::LoginArgs),

    /// Forget the stored login
    Logout(logout::LogoutArgs),

    /// Display the logged-in account
    Whoami(whoami::WhoamiArgs),

    /// List or search accounts
    List(list::ListUsersArgs),

    /// Show one account
    Show(show::ShowArgs),

    /// Edit your own profile
    Edit(edit::EditArgs),

    /// Block an account (admin)
    Block(block::BlockArgs),

    /// Change an account's role (operator)
    Promote(promote::PromoteArgs),
}

pub async fn handle(cmd: UserCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        UserSubcommand::Signup(args) => signup::run(args, ctx).await,
        UserSubcommand::Login(args) => login::run(args, ctx).await,
        UserSubcommand::Logout(args) => logout::run(args).await,
        UserSubcommand::Whoami(args) => whoami::run(args, ctx).await,
        UserSubcommand::List(args) => list::run(args, ctx).await,
        UserSubcommand::Show(args) => show::run(args, ctx).await,
        UserSubcommand::Edit(args) => edit::run(args, ctx).await,
        UserSubcommand::Block(args) => block::run(args, ctx).await,
        UserSubcommand::Promote(args) => promote::run(args, ctx).await,
    }
}
