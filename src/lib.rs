//! CxKitty configuration and push notification library
//!
//! This library loads the CxKitty `config.yml` into typed settings and
//! dispatches push notifications through ServerChan, Qmsg or Bark.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod notification;

// Re-export commonly used types for convenience
pub use crate::config::{Config, ConfigLoader, ConfigManager};
pub use crate::errors::{AppError, AppResult};
pub use crate::notification::{send_notification, NotificationFactory, NotificationService, Notifier};
