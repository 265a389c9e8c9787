//! CLI module providing command-line interface functionality
//!
//! This module handles argument parsing and routes commands to their handlers.

pub mod commands;
pub mod context;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

pub use commands::{Cli, Commands, ConfigAction};
pub use context::CliContext;
pub use handlers::CommandHandler;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        let context = CliContext::new(cli.config.clone(), cli.verbose);
        let _log_guard = if cli.command.needs_config() {
            context.init_logging()?
        } else {
            context.init_console_logging()?;
            None
        };

        let handler = CommandHandler::new(context);
        handler.handle_command(cli.command)
    }
}
