//! Ledger domain errors

use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Two accounts share the same identifier
    #[error("Duplicate account id: {0}")]
    DuplicateAccount(String),

    /// An account is missing its name
    #[error("Invalid account: {0}")]
    InvalidAccount(String),
}
