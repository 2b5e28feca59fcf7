//! Observability for carlot
//!
//! Structured one-line JSON logging with deterministic field ordering.

mod logger;

pub use logger::{Logger, Severity};
