//! Command definitions and structures for the CLI
//!
//! This module contains the clap-based command line argument definitions.

use crate::config::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "cxkitty-notify")]
#[command(about = "CxKitty configuration and push notification tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yml (searched beside the executable and in the working directory otherwise)
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a test notification through the configured provider
    Test {
        /// Message to send
        message: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List supported push providers
    Providers,
}

impl Commands {
    /// Whether the command reads the configuration
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Providers)
    }
}

/// Configuration inspection actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Show where the configuration is searched for
    Path,
}
