//! Qmsg (Qmsg酱) push provider
//!
//! POSTs the message as the `msg` query parameter. The response reports
//! `success` and, on failure, a `reason`.

use super::http::read_json;
use super::service::{NotificationService, ServiceState};
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct QmsgResponse {
    #[serde(default)]
    success: bool,
    reason: Option<String>,
}

#[derive(Debug)]
pub struct Qmsg {
    state: ServiceState,
    client: Client,
}

impl Qmsg {
    pub const NAME: &'static str = "Qmsg";

    pub fn new(client: Client) -> Self {
        Self {
            state: ServiceState::default(),
            client,
        }
    }
}

impl NotificationService for Qmsg {
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
            info!(provider = Self::NAME, "Qmsg push service initialized");
        }
    }

    fn send_raw(&self, message: &str) -> AppResult<()> {
        let response = self
            .client
            .post(&self.state.url)
            .query(&[("msg", message)])
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .send()?;

        let result: QmsgResponse = read_json(Self::NAME, response)?;
        if result.success {
            Ok(())
        } else {
            Err(AppError::rejected(
                Self::NAME,
                result.reason.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
