//! The local login.

pub mod storage;
mod types;

pub use types::CliSession;
