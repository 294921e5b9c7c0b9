//! Error types for the bank mediator.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur while executing operations or computing taxes.
#[derive(Error, Debug)]
pub enum BankError {
    /// Appending an operation to the log file failed
    #[error("failed to append to operation log {}: {source}", path.display())]
    LogAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a user-facing notification failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Amount text is not a decimal number
    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Amounts below zero are rejected
    #[error("Negative amount {0} is not allowed")]
    NegativeAmount(Decimal),
}
