//! CLI module for carlot
//!
//! Provides the command-line interface:
//! - serve: wire the store into the handler and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
