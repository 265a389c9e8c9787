//! Bark push provider
//!
//! Bark takes the title and body as path segments: a GET to
//! `<base>/<title>/<message>`. Both segments are percent-encoded. The push
//! went through when the response carries `code == 200`.
//!
//! Bark API Reference: https://github.com/Finb/Bark

use super::http::read_json;
use super::service::{NotificationService, ServiceState};
use super::NOTIFICATION_TITLE;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

#[derive(Debug, Deserialize)]
struct BarkResponse {
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug)]
pub struct Bark {
    state: ServiceState,
    client: Client,
}

impl Bark {
    pub const NAME: &'static str = "Bark";

    pub fn new(client: Client) -> Self {
        Self {
            state: ServiceState::default(),
            client,
        }
    }

    /// Builds the push URL for `message` on top of the normalized base URL
    pub fn push_url(&self, message: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.state.url)?;
        url.path_segments_mut()
            .map_err(|_| AppError::misconfigured(Self::NAME, "url cannot be a base"))?
            .pop_if_empty()
            .push(NOTIFICATION_TITLE)
            .push(message);
        Ok(url)
    }
}

impl NotificationService for Bark {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn state(&self) -> &ServiceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ServiceState {
        &mut self.state
    }

    fn initialize_service(&mut self) {
        if let Some(mut url) = self.state.require_url(Self::NAME) {
            if !url.ends_with('/') {
                url.push('/');
            }
            self.state.url = url;
            info!(provider = Self::NAME, "Bark push service initialized");
        }
    }

    fn send_raw(&self, message: &str) -> AppResult<()> {
        let url = self.push_url(message)?;
        let response = self.client.get(url).send()?;

        let result: BarkResponse = read_json(Self::NAME, response)?;
        if result.code == Some(200) {
            Ok(())
        } else {
            Err(AppError::rejected(
                Self::NAME,
                result.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
