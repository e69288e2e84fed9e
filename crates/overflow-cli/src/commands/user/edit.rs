//! Edit profile command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use overflow_core::validation::ProfileEdit;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Name shown instead of the username
    #[arg(long)]
    pub display_name: Option<String>,

    /// Free-text profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Experience summary
    #[arg(long)]
    pub exp: Option<String>,
}

pub async fn run(args: EditArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;
    let edit = ProfileEdit {
        display_name: args.display_name,
        profile: args.profile,
        exp: args.exp,
    };

    let profile = ctx
        .site
        .edit_user(&claims, &edit)
        .await
        .context("Failed to edit profile")?;

    output::success("Profile updated");
    output::field("Display name", &profile.display_name);

    Ok(())
}
