//! Persisted login state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use overflow_core::{RecordId, Username};

/// Who is logged in, and against which data directory.
///
/// Only the account id is trusted; claims are rebuilt from the store on every
/// command so role changes and blocks take effect immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliSession {
    pub id: RecordId,
    pub username: Username,
    pub data_dir: PathBuf,
}
