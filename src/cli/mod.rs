//! CLI module for viewstore
//!
//! Provides the command-line interface:
//! - start: load config, wire the service, serve the HTTP API
//! - check: validate a config file and print the effective settings

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, start};
pub use errors::{CliError, CliResult};
