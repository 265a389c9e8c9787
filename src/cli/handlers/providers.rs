//! Provider listing handler

use crate::notification::ProviderKind;
use anyhow::Result;

/// Handler listing the registered push providers
pub struct ProvidersHandler;

impl ProvidersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_list(&self) -> Result<()> {
        println!("Available providers:");
        for kind in ProviderKind::ALL {
            println!("  {kind}");
        }
        Ok(())
    }
}

impl Default for ProvidersHandler {
    fn default() -> Self {
        Self::new()
    }
}
