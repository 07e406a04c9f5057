//! CLI error handling

use std::path::PathBuf;
use thiserror::Error;

use core_kernel::{PortError, RecordError};
use domain_ledger::LedgerError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No page at {0}")]
    UnknownRoute(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid form in {path}: {source}")]
    Form {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Record(e) if e.is_validation() => 2,
            CliError::UnknownRoute(_) | CliError::InvalidArgument(_) | CliError::Form { .. } => 2,
            _ => 1,
        }
    }
}
