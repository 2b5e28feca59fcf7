//! CLI command implementations
//!
//! The serve command loads configuration, constructs the store, injects
//! it into the handler, and runs the server on a tokio runtime it owns.

use std::path::Path;
use std::sync::Arc;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::rest_api::{CarHandler, RestServer, ServiceConfig};
use crate::store::MemoryCarStore;

/// Parse arguments and dispatch to the matching command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Load config, wire up the service, and serve until stopped.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(path).map_err(CliError::Config)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
    }

    let store = if config.seed_demo_data {
        MemoryCarStore::with_demo_inventory()
    } else {
        MemoryCarStore::new()
    };
    let handler = CarHandler::new(Arc::new(store));
    let server = RestServer::new(handler, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Server(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_missing_config_file_fails() {
        let result = serve(Some(Path::new("/nonexistent/carlot.json")), None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
