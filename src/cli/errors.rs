//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// Tokio runtime could not be created
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The HTTP server failed
    #[error("Server error: {0}")]
    Server(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
