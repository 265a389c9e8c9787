//! The INI-style secondary notification source (`config.ini`)

use super::config::NotificationConfig;
use crate::errors::AppResult;
use std::path::Path;

/// Default location of the secondary configuration file
pub const SECONDARY_CONFIG_FILE: &str = "config.ini";

/// Section holding the notification keys
pub const NOTIFICATION_SECTION: &str = "notification";

/// Reads the `[notification]` section of an INI file
///
/// Returns `Ok(None)` when the file does not exist or has no such section.
/// Keys are lowercased, so `Provider` and `provider` are the same option.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_secondary_config(path: &Path) -> AppResult<Option<NotificationConfig>> {
    if !path.is_file() {
        return Ok(None);
    }

    let ini = ::config::Config::builder()
        .add_source(::config::File::from(path).format(::config::FileFormat::Ini))
        .build()?;

    let section = match ini.get_table(NOTIFICATION_SECTION) {
        Ok(section) => section,
        Err(::config::ConfigError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut notification = NotificationConfig::new();
    for (key, value) in section {
        notification.insert(key.to_ascii_lowercase(), value.into_string()?);
    }
    Ok(Some(notification))
}
