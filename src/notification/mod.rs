//! Push notifications for CxKitty
//!
//! A message is delivered through one of the supported third-party push
//! services, chosen by configuration:
//!
//! - **ServerChan**: JSON POST, success when `code == 0`
//! - **Qmsg**: POST with a `msg` query parameter, success when `success == true`
//! - **Bark**: GET on `<base>/<title>/<message>`, success when `code == 200`
//!
//! Sending never fails from the caller's point of view: a misconfigured
//! provider disables itself at startup and delivery errors are only logged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cxkitty_notify::notification::{NotificationConfig, NotificationFactory, Notifier};
//!
//! let config: NotificationConfig = [("provider", "Bark"), ("url", "https://api.day.app/key")]
//!     .into_iter()
//!     .collect();
//! let notifier = Notifier::new(NotificationFactory::new().create(Some(config)));
//! notifier.send("All tasks finished");
//! ```

pub mod bark;
pub mod config;
pub mod default;
pub mod dispatcher;
pub mod factory;
pub mod http;
pub mod qmsg;
pub mod secondary;
pub mod server_chan;
pub mod service;

/// Title attached to every push
pub const NOTIFICATION_TITLE: &str = "CxKitty通知";

pub use bark::Bark;
pub use self::config::NotificationConfig;
pub use default::DefaultNotification;
pub use dispatcher::{install_notification_service, notification_service, send_notification, Notifier};
pub use factory::{create_notification_service, NotificationFactory, ProviderKind};
pub use qmsg::Qmsg;
pub use secondary::{load_secondary_config, SECONDARY_CONFIG_FILE};
pub use server_chan::ServerChan;
pub use service::{Lifecycle, NotificationService, ServiceState};
