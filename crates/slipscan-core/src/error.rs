//! Error types for the slipscan-core library.
//!
//! Interpretation itself never fails; these cover configuration files and the
//! ledger store.

use thiserror::Error;

/// Main error type for the slipscan library.
#[derive(Error, Debug)]
pub enum SlipscanError {
    /// Ledger store error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Configuration file could not be parsed or serialized.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the expense/income ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A writer panicked while holding the store lock.
    #[error("ledger {0} lock poisoned")]
    Poisoned(&'static str),
}

/// Result type for the slipscan library.
pub type Result<T> = std::result::Result<T, SlipscanError>;
