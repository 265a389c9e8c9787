//! Configuration inspection handler

use super::super::{CliContext, ConfigAction};
use anyhow::{Context, Result};

/// Handler for configuration operations
pub struct ConfigHandler<'a> {
    context: &'a CliContext,
}

impl<'a> ConfigHandler<'a> {
    /// Create new configuration handler
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle_config(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Show => self.show(),
            ConfigAction::Path => self.path(),
        }
    }

    fn show(&self) -> Result<()> {
        let manager = self.context.config_manager()?;
        match manager.source() {
            Some(path) => println!("# source: {}", path.display()),
            None => println!("# source: built-in defaults"),
        }
        let yaml = serde_yaml::to_string(manager.config())
            .context("Failed to serialize configuration")?;
        print!("{yaml}");
        Ok(())
    }

    fn path(&self) -> Result<()> {
        let active = self.context.config_manager()?.source();
        for candidate in self.context.loader.candidates() {
            let marker = if Some(candidate.as_path()) == active { "*" } else { " " };
            println!("{marker} {}", candidate.display());
        }
        if active.is_none() {
            println!("No configuration file found; using defaults");
        }
        Ok(())
    }
}
