//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while interpreting dispute records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisputeError {
    #[error("unknown case status: {0}")]
    InvalidStatus(String),

    #[error("unknown ballot: {0}")]
    InvalidBallot(String),
}
