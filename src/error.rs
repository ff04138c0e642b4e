//! Error type for the harness.

use thiserror::Error;

/// Result alias used by the crate.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors surfaced by the harness.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A call shape disagreed with the static reference.
    #[error("{shape} returned {actual} for {input} * {factor}, expected {expected}")]
    Mismatch {
        shape: &'static str,
        factor: i64,
        input: i64,
        expected: i64,
        actual: i64,
    },
}
