use super::settings::Config;
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the primary configuration
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Environment variable that may point at an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "CXKITTY_CONFIG";

/// Locates `config.yml` among an ordered list of candidate paths
///
/// # Discovery order
///
/// 1. **Explicit**: a path passed on the command line or via `CXKITTY_CONFIG`
/// 2. **External**: `config.yml` beside the running executable
/// 3. **Bundled**: `config.yml` in the working directory
///
/// The first candidate that exists is loaded. When none exists the loader
/// warns and yields [`Config::default()`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    candidates: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader that searches exactly the given paths, in order
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Creates a loader with the default discovery order
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        let mut candidates = Vec::new();
        candidates.extend(explicit);

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join(CONFIG_FILE_NAME));
        }

        let bundled = PathBuf::from(CONFIG_FILE_NAME);
        if !candidates.contains(&bundled) {
            candidates.push(bundled);
        }

        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that exists on disk
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_file())
    }

    /// Loads the configuration, falling back to defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if a file was found but cannot be read or parsed.
    pub fn load(&self) -> AppResult<Config> {
        match self.locate() {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Config::from_file(path)
            }
            None => {
                warn!(
                    candidates = ?self.candidates,
                    "Config file not found, using default settings"
                );
                Ok(Config::default())
            }
        }
    }
}

/// Holds the configuration loaded at startup
///
/// The configuration is read-only once loaded; callers only ever get a
/// shared reference to it.
///
/// # Example
///
/// ```rust,no_run
/// use cxkitty_notify::config::{ConfigLoader, ConfigManager};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ConfigManager::new(&ConfigLoader::discover(None))?;
///     println!("Export path: {}", manager.config().export_path.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigManager {
    source: Option<PathBuf>,
    config: Config,
}

impl ConfigManager {
    /// Loads the configuration and prepares the export directory
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A configuration file exists but cannot be read or parsed
    /// - The export directory is missing and cannot be created
    pub fn new(loader: &ConfigLoader) -> AppResult<Self> {
        let source = loader.locate().map(Path::to_path_buf);
        let config = loader.load()?;
        config.ensure_export_dir()?;

        Ok(ConfigManager { source, config })
    }

    /// Wraps an already-built configuration without touching the filesystem
    pub fn from_config(config: Config) -> Self {
        ConfigManager {
            source: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the file the configuration was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
