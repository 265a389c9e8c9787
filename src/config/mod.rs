//! Configuration for CxKitty
//!
//! `config.yml` is loaded once at startup into a typed [`Config`]. Missing
//! files degrade to defaults with a warning; malformed files are an error.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, ConfigManager, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use settings::{Config, NotificationSettings, SearcherEntry, TaskConfig, TaskKind};
