use crate::errors::{AppError, AppResult};
use crate::notification::NotificationConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure for CxKitty
///
/// Mirrors the layout of `config.yml`. Every key is optional; an absent key
/// (or one explicitly set to `null`) takes its documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session_path: PathBuf,
    pub log_path: PathBuf,
    pub export_path: PathBuf,
    pub face_image_path: PathBuf,
    pub multi_session: bool,
    pub tui_max_height: u16,
    pub mask_acc: bool,
    pub fetch_uploaded_face: bool,
    pub work: TaskConfig,
    pub video: TaskConfig,
    pub document: TaskConfig,
    pub exam: TaskConfig,
    pub searchers: Vec<SearcherEntry>,
    pub notification: NotificationSettings,
}

/// Enable flag and wait interval for one kind of task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub enable: bool,
    /// Seconds to wait after finishing one item of this task
    pub wait: u64,
}

/// Task kinds that carry a [`TaskConfig`] block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Work,
    Video,
    Document,
    Exam,
}

/// One entry of the `searchers` list
///
/// Accepts either a bare backend identifier or a mapping whose `type` key
/// names the backend and whose remaining keys are backend options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearcherEntry {
    Name(String),
    Backend {
        #[serde(rename = "type")]
        kind: String,
        #[serde(flatten)]
        options: BTreeMap<String, serde_yaml::Value>,
    },
}

/// The `notification` block of `config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub provider: String,
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            session_path: PathBuf::from("session"),
            log_path: PathBuf::from("logs"),
            export_path: PathBuf::from("export"),
            face_image_path: PathBuf::from("faces"),
            multi_session: true,
            tui_max_height: 25,
            mask_acc: true,
            fetch_uploaded_face: true,
            work: TaskConfig::default(),
            video: TaskConfig::default(),
            document: TaskConfig::default(),
            exam: TaskConfig::default(),
            searchers: Vec::new(),
            notification: NotificationSettings::default(),
        }
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            enable: true,
            wait: 15,
        }
    }
}

impl TaskConfig {
    pub fn wait_duration(&self) -> Duration {
        Duration::from_secs(self.wait)
    }
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Work,
        TaskKind::Video,
        TaskKind::Document,
        TaskKind::Exam,
    ];

    /// Key of the task block in `config.yml`
    pub fn key(self) -> &'static str {
        match self {
            TaskKind::Work => "work",
            TaskKind::Video => "video",
            TaskKind::Document => "document",
            TaskKind::Exam => "exam",
        }
    }
}

impl SearcherEntry {
    /// Backend identifier of this searcher
    pub fn kind(&self) -> &str {
        match self {
            SearcherEntry::Name(name) => name,
            SearcherEntry::Backend { kind, .. } => kind,
        }
    }
}

impl Config {
    /// Parses a YAML document into a `Config`
    ///
    /// An empty document yields the defaults. Keys with a `null` value are
    /// dropped before deserialization so that they fall back to defaults.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Config::default());
        }
        strip_nulls(&mut value);
        Ok(serde_yaml::from_value(value)?)
    }

    /// Reads and parses the YAML file at `path`
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::io_with_source(path, "read config file", e))?;
        Self::from_yaml_str(&content).map_err(|e| AppError::config_parse(path, e))
    }

    /// Settings block for the given task kind
    pub fn task(&self, kind: TaskKind) -> &TaskConfig {
        match kind {
            TaskKind::Work => &self.work,
            TaskKind::Video => &self.video,
            TaskKind::Document => &self.document,
            TaskKind::Exam => &self.exam,
        }
    }

    /// Identifiers of the configured search backends, in order
    pub fn searcher_kinds(&self) -> Vec<&str> {
        self.searchers.iter().map(SearcherEntry::kind).collect()
    }

    /// Creates the export directory (and its parents) if it does not exist
    ///
    /// Does nothing when `export_path` is empty.
    pub fn ensure_export_dir(&self) -> AppResult<()> {
        if self.export_path.as_os_str().is_empty() || self.export_path.exists() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.export_path).map_err(|e| {
            AppError::io_with_source(&self.export_path, "create export directory", e)
        })?;
        tracing::debug!("Created export directory {}", self.export_path.display());
        Ok(())
    }
}

impl NotificationSettings {
    /// Notification settings to hand to the factory, if this block enables any
    ///
    /// `None` means the secondary INI file decides.
    pub fn to_primary_config(&self) -> Option<NotificationConfig> {
        NotificationConfig::from_primary(self)
    }
}

fn strip_nulls(value: &mut serde_yaml::Value) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            map.retain(|_, v| !v.is_null());
            for (_, v) in map.iter_mut() {
                strip_nulls(v);
            }
        }
        serde_yaml::Value::Sequence(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
