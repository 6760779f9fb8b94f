//! Special mode toggle

use std::sync::Arc;

use tracing::info;

use crate::domain::preferences::{PreferenceStore, SPECIAL_MODE_KEY};
use crate::domain::DomainError;

/// Settings-screen controller for the persisted special mode flag
#[derive(Debug)]
pub struct SpecialModeController {
    store: Arc<dyn PreferenceStore>,
    enabled: bool,
    show_message: bool,
}

impl SpecialModeController {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            enabled: false,
            show_message: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the one-shot confirmation should be shown
    pub fn show_message(&self) -> bool {
        self.show_message
    }

    /// Read the stored flag; never written means off
    pub async fn load(&mut self) -> Result<bool, DomainError> {
        self.enabled = self.store.get_flag(SPECIAL_MODE_KEY).await?.unwrap_or(false);
        Ok(self.enabled)
    }

    /// Flip and persist the flag, raising the confirmation message
    pub async fn toggle(&mut self) -> Result<bool, DomainError> {
        let enabled = !self.enabled;
        self.store.set_flag(SPECIAL_MODE_KEY, enabled).await?;

        self.enabled = enabled;
        self.show_message = true;
        info!(enabled, "Special mode toggled");

        Ok(enabled)
    }

    pub fn dismiss_message(&mut self) {
        self.show_message = false;
    }
}
