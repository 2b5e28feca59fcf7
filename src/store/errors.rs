//! Store error types.
//!
//! Domain conditions (a missing id) are ordinary return values. The store
//! fails only when its lock has been poisoned by a panicking writer.

use thiserror::Error;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store mutex was poisoned by a panic in another thread
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
