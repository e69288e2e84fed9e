//! overflow - operator CLI for a file-backed Q&A site.
//!
//! Runs the `overflow-core` site operations against a data directory through
//! `overflow-file`, for seeding, moderation and inspection.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{Context, blog, follow, question, tag, user};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let ctx = Context::new(&cli.store);

    match cli.command {
        Commands::User(cmd) => user::handle(cmd, &ctx).await,
        Commands::Question(cmd) => question::handle(cmd, &ctx).await,
        Commands::Blog(cmd) => blog::handle(cmd, &ctx).await,
        Commands::Tag(cmd) => tag::handle(cmd, &ctx).await,
        Commands::Follow(cmd) => follow::handle(cmd, &ctx).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
