//! Signup command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::validation::SignupDraft;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Username (letters, digits, '_' and '-', at most 16)
    pub username: String,

    /// Account password (6 to 50 characters)
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: SignupArgs, ctx: &Context) -> Result<()> {
    let draft = SignupDraft::new(&args.username, &args.password);
    let profile = ctx
        .site
        .signup(&draft, &ctx.hasher)
        .await
        .context("Failed to create account")?;

    output::success("User created!");
    println!();
    output::field("ID", profile.id.as_str());
    output::field("Username", profile.username.as_str());

    Ok(())
}
