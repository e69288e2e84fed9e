//! Login command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use overflow_core::Credentials;

use crate::commands::Context;
use crate::output;
use crate::session::{CliSession, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let profile = ctx
        .site
        .authenticate(&credentials, &ctx.hasher)
        .await
        .context("Failed to login")?;

    let session = CliSession {
        id: profile.id,
        username: profile.username,
        data_dir: ctx.data_dir.clone(),
    };
    storage::save_session(&session).context("Failed to save session")?;

    output::success("Authentication successful!");
    println!();
    output::field("ID", session.id.as_str());
    output::field("Username", session.username.as_str());
    output::field("Role", profile.role.as_str());

    Ok(())
}
