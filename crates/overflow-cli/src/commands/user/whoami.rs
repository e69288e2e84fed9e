//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, ctx: &Context) -> Result<()> {
    let claims = ctx.claims().await?;

    output::field("ID", claims.id.as_str());
    output::field("Username", claims.username.as_str());
    output::field("Role", claims.role.as_str());
    output::field("Data", &ctx.data_dir.display().to_string());

    Ok(())
}
