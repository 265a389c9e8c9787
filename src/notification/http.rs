//! Blocking HTTP plumbing shared by the providers

use crate::errors::{AppError, AppResult, ErrorContextExt};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout applied to every push request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("cxkitty-notify/", env!("CARGO_PKG_VERSION"));

/// Builds the blocking client used for outbound push requests
pub fn build_http_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .with_context("Failed to create HTTP client")
}

/// Checks the status and decodes the JSON body of a provider response
pub(crate) fn read_json<T: DeserializeOwned>(provider: &str, response: Response) -> AppResult<T> {
    let response = response.error_for_status()?;
    let body = response
        .text()
        .map_err(|e| AppError::invalid_response(provider, "unreadable body", e))?;
    serde_json::from_str(&body).map_err(|e| {
        AppError::invalid_response(provider, format!("unexpected body: {}", truncate(&body)), e)
    })
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
