//! Command handlers for all CLI operations

pub mod config;
pub mod providers;

use super::{CliContext, Commands};
use anyhow::Result;

pub use self::config::ConfigHandler;
pub use providers::ProvidersHandler;
pub use test::TestHandler;

/// Routes parsed commands to their handlers
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Test { message } => TestHandler::new(&self.context).handle_test(&message),
            Commands::Config { action } => ConfigHandler::new(&self.context).handle_config(action),
            Commands::Providers => ProvidersHandler::new().handle_list(),
        }
    }
}
