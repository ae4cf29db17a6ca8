//! CLI argument definitions using clap
//!
//! Commands:
//! - viewstore start --config <path>
//! - viewstore check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// viewstore - A singleton-document content view data service
#[derive(Parser, Debug)]
#[command(name = "viewstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the viewstore service
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./viewstore.json")]
        config: PathBuf,
    },

    /// Validate a configuration file and print the effective settings
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./viewstore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
