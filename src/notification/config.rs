use crate::config::NotificationSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat key/value settings handed to a notification service
///
/// Always carries `provider` and `url` when built from `config.yml`; the
/// `[notification]` INI section may add provider-specific keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationConfig {
    values: BTreeMap<String, String>,
}

impl NotificationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from the primary `notification` block
    ///
    /// Returns `None` unless notifications are enabled and a provider is
    /// named, in which case the secondary INI file should be consulted.
    pub fn from_primary(settings: &NotificationSettings) -> Option<Self> {
        if !settings.enabled || settings.provider.trim().is_empty() {
            return None;
        }
        Some(Self::from(settings))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key` with surrounding whitespace removed; blank counts as absent
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn provider(&self) -> Option<&str> {
        self.get_trimmed("provider")
    }

    pub fn url(&self) -> Option<&str> {
        self.get_trimmed("url")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&NotificationSettings> for NotificationConfig {
    fn from(settings: &NotificationSettings) -> Self {
        [
            ("provider", settings.provider.as_str()),
            ("url", settings.url.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for NotificationConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
