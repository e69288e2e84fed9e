//! Subcommand implementations.

pub mod blog;
pub mod follow;
pub mod question;
pub mod tag;
pub mod user;

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Args;
use tracing::warn;

use overflow_core::auth::Claims;
use overflow_core::{ListParams, ListingConfig, Site};
use overflow_file::{BcryptHasher, FileStore};

use crate::cli::StoreArgs;
use crate::session::storage;

/// Everything a command needs: the site over the data directory and the
/// password hasher.
pub struct Context {
    pub site: Site<FileStore>,
    pub hasher: BcryptHasher,
    pub data_dir: PathBuf,
}

impl Context {
    pub fn new(args: &StoreArgs) -> Self {
        let mut config = ListingConfig::default();
        if let Some(max_limit) = args.max_limit {
            config = config.with_max_limit(max_limit);
        }

        Self {
            site: Site::with_config(FileStore::new(&args.data_dir), config),
            hasher: BcryptHasher::new(args.bcrypt_cost),
            data_dir: args.data_dir.clone(),
        }
    }

    /// Claims of the logged-in user, re-read from the store.
    pub async fn claims(&self) -> Result<Claims> {
        let session = storage::load_session()
            .context("Failed to load session")?
            .context("No active session. Run 'overflow user login' first.")?;

        if session.data_dir != self.data_dir {
            warn!(
                session = %session.data_dir.display(),
                current = %self.data_dir.display(),
                "Session was created against a different data directory"
            );
        }

        match self.site.claims_for(&session.id).await {
            Ok(claims) => Ok(claims),
            Err(err) if err.is_auth_error() => {
                bail!("Session for '{}' is no longer valid: {}", session.username, err)
            }
            Err(err) => Err(err).context("Failed to load account"),
        }
    }
}

/// Paging and search flags shared by the listing commands.
///
/// Values are passed through as typed; malformed numbers fall back to the
/// listing defaults.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Free-text search term
    #[arg(long)]
    pub key: Option<String>,

    /// Page number, starting at 1
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Page size
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Sort field, prefixed with '-' for descending
    #[arg(long = "sort", allow_hyphen_values = true)]
    pub sort_type: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ListArgs {
    pub fn params(&self) -> ListParams {
        ListParams {
            key: self.key.clone(),
            page: self.page.clone(),
            limit: self.limit.clone(),
            sort_type: self.sort_type.clone(),
        }
    }
}
