use super::service::{NotificationService, ServiceState};
use crate::errors::AppResult;
use std::path::PathBuf;
use tracing::debug;

/// No-op service used when no provider is configured or resolution fails
#[derive(Debug, Default)]
pub struct DefaultNotification {
    state: ServiceState,
}

impl DefaultNotification {
    pub const NAME: &'static str = "Default";

    pub fn new(secondary_path: PathBuf) -> Self {
        Self {
            state: ServiceState::new(secondary_path),
        }
    }

    /// An instance that drops every message
    pub fn disabled() -> Self {
        let mut service = Self::default();
        service.state.disabled = true;
        service.state.initialized = true;
        service
    }
}

impl NotificationService for DefaultNotification {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn state(&self) -> &ServiceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ServiceState {
        &mut self.state
    }

    fn initialize_service(&mut self) {}

    fn send_raw(&self, message: &str) -> AppResult<()> {
        debug!(message, "Default notification service received message");
        Ok(())
    }
}
