//! CLI command implementations
//!
//! `start` is the only long-running command: it wires the storage
//! client, store, assembler, and diagnostic sink into a facade and
//! serves the HTTP API on the configured address.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::api::ApiServer;
use crate::assembler::BasicAssembler;
use crate::config::ServiceConfig;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::facade::DataFacade;
use crate::storage::MemoryStorageClient;
use crate::store::SingletonCollectionStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
    }
}

/// Start the service and serve until shutdown.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink::new());
    let facade = Arc::new(build_facade(&config, sink));
    let server = ApiServer::new(facade, config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Validate a config file and print the effective settings.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let rendered = serde_json::to_string_pretty(&config)?;
    println!("{}", rendered);
    Ok(())
}

fn load_config(path: &Path) -> CliResult<ServiceConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("failed to parse {}: {}", path.display(), e)))
}

/// Wire the facade from configuration. A missing storage section
/// yields a facade that reports storage as not ready.
fn build_facade(config: &ServiceConfig, sink: Arc<dyn DiagnosticSink>) -> DataFacade {
    let assembler = Arc::new(BasicAssembler::new());
    match &config.storage {
        Some(storage) => {
            let client = Arc::new(MemoryStorageClient::new(storage.database.clone()));
            let store = SingletonCollectionStore::new(client, sink.clone());
            DataFacade::new(store, assembler, sink)
        }
        None => DataFacade::without_storage(assembler, sink),
    }
}
