use super::config::NotificationConfig;
use super::secondary::{load_secondary_config, SECONDARY_CONFIG_FILE};
use crate::errors::AppResult;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Where a service instance is in its lifecycle
///
/// `Unconfigured → Configured → {Disabled | Active}`. Both end states are
/// terminal; delivery failures never change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unconfigured,
    Configured,
    Disabled,
    Active,
}

/// State shared by every notification service
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub(crate) config: Option<NotificationConfig>,
    pub(crate) url: String,
    pub(crate) disabled: bool,
    pub(crate) initialized: bool,
    pub(crate) secondary_path: PathBuf,
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::new(PathBuf::from(SECONDARY_CONFIG_FILE))
    }
}

impl ServiceState {
    pub fn new(secondary_path: PathBuf) -> Self {
        Self {
            config: None,
            url: String::new(),
            disabled: false,
            initialized: false,
            secondary_path,
        }
    }

    pub fn config(&self) -> Option<&NotificationConfig> {
        self.config.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.disabled {
            Lifecycle::Disabled
        } else if self.initialized {
            Lifecycle::Active
        } else if self.config.is_some() {
            Lifecycle::Configured
        } else {
            Lifecycle::Unconfigured
        }
    }

    /// Loads the configuration from the secondary INI file
    ///
    /// A missing file, a missing section or an unreadable file all leave the
    /// service disabled.
    pub(crate) fn load_secondary(&mut self, service: &str) {
        match load_secondary_config(&self.secondary_path) {
            Ok(Some(config)) => self.config = Some(config),
            Ok(None) => {
                info!(
                    service,
                    path = %self.secondary_path.display(),
                    "No notification settings found, push notifications disabled"
                );
                self.disabled = true;
            }
            Err(e) => {
                error!(service, error = %e, "Failed to read notification settings");
                self.disabled = true;
            }
        }
    }

    /// Resolves the configured endpoint, disabling the service when it is blank
    pub(crate) fn require_url(&mut self, provider: &str) -> Option<String> {
        match self.config.as_ref().and_then(NotificationConfig::url) {
            Some(url) => Some(url.to_string()),
            None => {
                info!(provider, "No url configured, push notifications disabled");
                self.disabled = true;
                None
            }
        }
    }
}

/// Contract every push provider implements
///
/// Providers supply [`initialize_service`](Self::initialize_service) and
/// [`send_raw`](Self::send_raw); configuration storage, lazy loading of the
/// secondary file and the never-failing [`send`](Self::send) are shared.
pub trait NotificationService: Send + Sync + fmt::Debug {
    /// Registry name of the provider
    fn name(&self) -> &'static str;

    fn state(&self) -> &ServiceState;

    fn state_mut(&mut self) -> &mut ServiceState;

    /// Validates the stored configuration and resolves the endpoint
    ///
    /// Must mark the instance disabled when required keys are missing.
    fn initialize_service(&mut self);

    /// Delivers one message, assuming the instance is enabled
    fn send_raw(&self, message: &str) -> AppResult<()>;

    /// Stores the configuration for later initialization
    fn configure(&mut self, config: NotificationConfig) {
        self.state_mut().config = Some(config);
    }

    fn is_disabled(&self) -> bool {
        self.state().disabled
    }

    /// Resolved endpoint, empty until initialized
    fn url(&self) -> &str {
        &self.state().url
    }

    fn lifecycle(&self) -> Lifecycle {
        self.state().lifecycle()
    }

    /// Loads missing configuration from the secondary file and initializes
    fn init_notification(&mut self) {
        let name = self.name();
        if self.state().config.is_none() && !self.state().disabled {
            self.state_mut().load_secondary(name);
        }

        if !self.state().disabled && self.state().config.is_some() {
            self.initialize_service();
        }
        self.state_mut().initialized = true;
    }

    /// Sends a message; failures are logged and never returned
    fn send(&self, message: &str) {
        if self.is_disabled() {
            debug!(provider = self.name(), "Notifications disabled, message dropped");
            return;
        }

        match self.send_raw(message) {
            Ok(()) => info!(provider = self.name(), "Push notification sent"),
            Err(e) if e.is_delivery_failure() => warn!(
                provider = self.name(),
                category = e.category(),
                error = %e,
                "Failed to send push notification"
            ),
            Err(e) => error!(
                provider = self.name(),
                category = e.category(),
                error = %e,
                "Push notification could not be prepared"
            ),
        }
    }
}
