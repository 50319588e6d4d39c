//! Store error types.

use thiserror::Error;

/// Error type for persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
