use super::default::DefaultNotification;
use super::factory::NotificationFactory;
use super::service::NotificationService;
use crate::config::{ConfigLoader, NotificationSettings};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::error;

/// Shareable handle to an initialized notification service
///
/// Built once at startup and cloned into whatever needs to notify.
#[derive(Debug, Clone)]
pub struct Notifier {
    service: Arc<dyn NotificationService>,
}

impl Notifier {
    pub fn new(service: Box<dyn NotificationService>) -> Self {
        Self {
            service: Arc::from(service),
        }
    }

    /// Builds the service from the primary `notification` block
    ///
    /// When the block does not enable notifications with a named provider,
    /// the factory falls back to its secondary INI file.
    pub fn from_settings(settings: &NotificationSettings, factory: &NotificationFactory) -> Self {
        Self::new(factory.create(settings.to_primary_config()))
    }

    /// A handle that drops every message
    pub fn disabled() -> Self {
        Self::new(Box::new(DefaultNotification::disabled()))
    }

    /// Fire-and-forget delivery; never fails
    pub fn send(&self, message: &str) {
        self.service.send(message);
    }

    pub fn service(&self) -> &dyn NotificationService {
        self.service.as_ref()
    }

    pub fn provider_name(&self) -> &'static str {
        self.service.name()
    }

    pub fn is_disabled(&self) -> bool {
        self.service.is_disabled()
    }
}

static NOTIFIER: OnceCell<Notifier> = OnceCell::new();

/// Installs the process-wide notifier
///
/// Must happen before the first [`send_notification`]; afterwards the
/// rejected handle is handed back.
pub fn install_notification_service(notifier: Notifier) -> Result<(), Notifier> {
    NOTIFIER.set(notifier)
}

/// Returns the process-wide notifier, building it on first use
///
/// Construction loads `config.yml` through the default discovery order. A
/// configuration that fails to load leaves notifications disabled.
pub fn notification_service() -> &'static Notifier {
    NOTIFIER.get_or_init(|| match ConfigLoader::discover(None).load() {
        Ok(config) => Notifier::from_settings(&config.notification, &NotificationFactory::default()),
        Err(e) => {
            error!(error = %e, "Failed to load configuration, push notifications disabled");
            Notifier::disabled()
        }
    })
}

/// Sends a message through the process-wide notifier
pub fn send_notification(message: &str) {
    notification_service().send(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::secondary::SECONDARY_CONFIG_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_from_settings_prefers_primary_block() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(SECONDARY_CONFIG_FILE),
            "[notification]\nprovider = Qmsg\nurl = https://qmsg.zendee.cn/send/k\n",
        )
        .unwrap();
        let factory = NotificationFactory::new()
            .with_secondary_path(temp_dir.path().join(SECONDARY_CONFIG_FILE));

        let primary = NotificationSettings {
            enabled: true,
            provider: "ServerChan".to_string(),
            url: "https://sctapi.ftqq.com/key.send".to_string(),
        };
        let notifier = Notifier::from_settings(&primary, &factory);
        assert_eq!(notifier.provider_name(), "ServerChan");

        // Not enabled: the INI file decides
        let notifier = Notifier::from_settings(
            &NotificationSettings {
                enabled: false,
                ..primary
            },
            &factory,
        );
        assert_eq!(notifier.provider_name(), "Qmsg");
        assert!(!notifier.is_disabled());
    }

    #[test]
    fn test_disabled_notifier_drops_messages() {
        let notifier = Notifier::disabled();
        assert!(notifier.is_disabled());
        assert_eq!(notifier.provider_name(), DefaultNotification::NAME);
        notifier.send("hello");
    }

    #[test]
    fn test_global_notifier_is_installed_once() {
        assert!(install_notification_service(Notifier::disabled()).is_ok());
        assert!(notification_service().is_disabled());

        let rejected = install_notification_service(Notifier::disabled());
        assert!(rejected.is_err());

        send_notification("hello");
    }
}
