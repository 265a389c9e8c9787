//! CLI Context for dependency injection and shared state
//!
//! Loads the configuration once and hands it to every handler.

use crate::config::{ConfigLoader, ConfigManager};
use crate::notification::{NotificationFactory, Notifier};
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI execution context containing shared dependencies and configuration
///
/// The configuration is loaded on first use, so commands that never touch it
/// leave the filesystem alone.
#[derive(Clone)]
pub struct CliContext {
    pub verbose: bool,
    pub loader: ConfigLoader,
    config_manager: OnceCell<Arc<ConfigManager>>,
}

impl CliContext {
    /// Create a new CLI context searching the discovered locations
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            verbose,
            loader: ConfigLoader::discover(config_path),
            config_manager: OnceCell::new(),
        }
    }

    /// The loaded configuration, read from disk the first time it is asked for
    pub fn config_manager(&self) -> Result<&ConfigManager> {
        self.config_manager
            .get_or_try_init(|| ConfigManager::new(&self.loader).map(Arc::new))
            .map(|manager| &**manager)
            .context("Failed to load configuration")
    }

    /// Initialize logging into the configured log directory
    pub fn init_logging(&self) -> Result<Option<WorkerGuard>> {
        let manager = self.config_manager()?;
        let log_dir = &manager.config().log_path;
        let guard = crate::logging::init_logging(self.verbose, Some(log_dir.as_path()))?;

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Config source: {:?}", manager.source());
        }

        Ok(guard)
    }

    /// Initialize stderr-only logging for commands that need no configuration
    pub fn init_console_logging(&self) -> Result<()> {
        crate::logging::init_logging(self.verbose, None)?;
        Ok(())
    }

    /// Build the notifier described by the loaded configuration
    pub fn notifier(&self) -> Result<Notifier> {
        let manager = self.config_manager()?;
        Ok(Notifier::from_settings(
            &manager.config().notification,
            &NotificationFactory::new(),
        ))
    }
}
