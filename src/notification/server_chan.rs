//! ServerChan (Server酱) push provider
//!
//! POSTs `{"text": <title>, "desp": <message>}` as JSON to the configured
//! send URL. The push went through when the response carries `code == 0`.

use super::http::read_json;
use super::service::{NotificationService, ServiceState};
use super::NOTIFICATION_TITLE;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize)]
struct ServerChanRequest<'a> {
    text: &'a str,
    desp: &'a str,
}

#[derive(Debug, Deserialize)]
struct ServerChanResponse {
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug)]
pub struct ServerChan {
    state: ServiceState,
    client: Client,
}

impl ServerChan {
    pub const NAME: &'static str = "ServerChan";

    pub fn new(client: Client) -> Self {
        Self {
            state: ServiceState::default(),
            client,
        }
    }
}

impl NotificationService for ServerChan {
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
        if let Some(url) = self.state.require_url(Self::NAME) {
            self.state.url = url;
            info!(provider = Self::NAME, "ServerChan push service initialized");
        }
    }

    fn send_raw(&self, message: &str) -> AppResult<()> {
        let body = ServerChanRequest {
            text: NOTIFICATION_TITLE,
            desp: message,
        };

        let response = self
            .client
            .post(&self.state.url)
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .json(&body)
            .send()?;

        let result: ServerChanResponse = read_json(Self::NAME, response)?;
        if result.code == Some(0) {
            Ok(())
        } else {
            Err(AppError::rejected(
                Self::NAME,
                result.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
