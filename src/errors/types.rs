//! Error types for the cxkitty-notify crate
//!
//! This module defines the error conditions that can occur while loading
//! configuration and dispatching push notifications, grouped by domain.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
///
/// Configuration errors are the only ones allowed to abort startup. Notification
/// errors are produced by providers and logged by the service layer.
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to parse configuration file '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // I/O errors
    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Notification errors
    #[error("Unknown notification provider: {name}")]
    UnknownProvider { name: String },

    #[error("Notification provider '{provider}' is misconfigured: {reason}")]
    ProviderMisconfigured { provider: String, reason: String },

    #[error("{provider} push failed: {reason}")]
    ProviderRejected { provider: String, reason: String },

    // Network and HTTP errors
    #[error("HTTP request to {url} failed")]
    HttpRequest {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Network timeout for {url}")]
    NetworkTimeout { url: String },

    #[error("HTTP {status_code}: {reason}")]
    HttpStatus { status_code: u16, reason: String },

    #[error("Invalid response from {provider}: {context}")]
    InvalidResponse {
        provider: String,
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Validation and parsing errors
    #[error("Parse error for '{input}': {expected}")]
    Parse {
        input: String,
        expected: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a ConfigParse error for the given file
    pub fn config_parse(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn misconfigured(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderMisconfigured {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// A provider answered but reported that the push did not go through
    pub fn rejected(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderRejected {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidResponse error with source
    pub fn invalid_response(
        provider: impl Into<String>,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } | Self::ConfigParse { .. } => "config",
            Self::Io { .. } => "io",
            Self::UnknownProvider { .. }
            | Self::ProviderMisconfigured { .. }
            | Self::ProviderRejected { .. }
            | Self::InvalidResponse { .. } => "notification",
            Self::HttpRequest { .. } | Self::NetworkTimeout { .. } | Self::HttpStatus { .. } => {
                "network"
            }
            Self::Parse { .. } => "validation",
            Self::Other { .. } => "internal",
        }
    }

    /// Whether the failure came from talking to a remote push service
    ///
    /// Delivery failures are expected at runtime and logged as warnings.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            Self::ProviderRejected { .. }
                | Self::InvalidResponse { .. }
                | Self::HttpRequest { .. }
                | Self::NetworkTimeout { .. }
                | Self::HttpStatus { .. }
        )
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config {
            message: format!("YAML error: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if err.is_timeout() {
            Self::NetworkTimeout { url }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                status_code: status.as_u16(),
                reason: err.to_string(),
            }
        } else {
            Self::HttpRequest {
                url,
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::Parse {
            input: "URL".to_string(),
            expected: "valid URL format".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::config_with_source("Failed to read INI configuration", err)
    }
}
