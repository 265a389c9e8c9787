use super::bark::Bark;
use super::config::NotificationConfig;
use super::default::DefaultNotification;
use super::http::{build_http_client, REQUEST_TIMEOUT};
use super::qmsg::Qmsg;
use super::secondary::SECONDARY_CONFIG_FILE;
use super::server_chan::ServerChan;
use super::service::NotificationService;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

/// The closed set of supported push providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    ServerChan,
    Qmsg,
    Bark,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::ServerChan, ProviderKind::Qmsg, ProviderKind::Bark];

    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::ServerChan => ServerChan::NAME,
            ProviderKind::Qmsg => Qmsg::NAME,
            ProviderKind::Bark => Bark::NAME,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    /// Matches registered names ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::UnknownProvider {
                name: name.to_string(),
            })
    }
}

/// Builds notification services from configuration
///
/// Resolution starts from a [`DefaultNotification`]. When the configuration
/// names a registered provider, that provider is constructed with the same
/// configuration; otherwise the default instance is returned, disabled if the
/// name was not recognised. The returned service is always initialized.
#[derive(Debug, Clone)]
pub struct NotificationFactory {
    secondary_path: PathBuf,
    timeout: Duration,
}

impl Default for NotificationFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationFactory {
    pub fn new() -> Self {
        Self {
            secondary_path: PathBuf::from(SECONDARY_CONFIG_FILE),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Use a different INI file as the secondary configuration source
    pub fn with_secondary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.secondary_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn secondary_path(&self) -> &PathBuf {
        &self.secondary_path
    }

    pub fn supported_providers(&self) -> Vec<&'static str> {
        ProviderKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Creates and initializes a notification service
    ///
    /// An empty configuration is treated like no configuration, in which case
    /// the secondary file is consulted.
    pub fn create(&self, config: Option<NotificationConfig>) -> Box<dyn NotificationService> {
        let mut fallback = DefaultNotification::new(self.secondary_path.clone());
        if let Some(config) = config.filter(|c| !c.is_empty()) {
            fallback.configure(config);
        }

        let mut service = self.resolve(fallback);
        service.init_notification();
        service
    }

    fn resolve(&self, mut fallback: DefaultNotification) -> Box<dyn NotificationService> {
        if fallback.state().config().is_none() {
            fallback.state_mut().load_secondary(DefaultNotification::NAME);
        }

        if fallback.is_disabled() {
            return Box::new(fallback);
        }
        let Some(config) = fallback.state().config().cloned() else {
            return Box::new(fallback);
        };

        let Some(provider_name) = config.provider() else {
            info!("No notification provider specified, using default service");
            return Box::new(fallback);
        };

        let kind = match provider_name.parse::<ProviderKind>() {
            Ok(kind) => kind,
            Err(e) => {
                error!(error = %e, "Notification provider not found");
                fallback.state_mut().disabled = true;
                return Box::new(fallback);
            }
        };

        match self.build(kind, config) {
            Ok(service) => service,
            Err(e) => {
                error!(provider = kind.name(), error = %e, "Failed to create notification service");
                fallback.state_mut().disabled = true;
                Box::new(fallback)
            }
        }
    }

    fn build(
        &self,
        kind: ProviderKind,
        config: NotificationConfig,
    ) -> AppResult<Box<dyn NotificationService>> {
        let client = build_http_client(self.timeout)?;
        let mut service: Box<dyn NotificationService> = match kind {
            ProviderKind::ServerChan => Box::new(ServerChan::new(client)),
            ProviderKind::Qmsg => Box::new(Qmsg::new(client)),
            ProviderKind::Bark => Box::new(Bark::new(client)),
        };
        service.state_mut().secondary_path = self.secondary_path.clone();
        service.configure(config);
        Ok(service)
    }
}

/// Creates a notification service with the default factory settings
pub fn create_notification_service(
    config: Option<NotificationConfig>,
) -> Box<dyn NotificationService> {
    NotificationFactory::default().create(config)
}
