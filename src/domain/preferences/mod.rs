//! User preferences domain

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Key of the "special mode" flag
pub const SPECIAL_MODE_KEY: &str = "modo_activado";

/// Persistent boolean flags
#[async_trait]
pub trait PreferenceStore: Send + Sync + Debug {
    /// Read a flag; `None` when it was never written
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, DomainError>;

    /// Write a flag, replacing any previous value
    async fn set_flag(&self, key: &str, value: bool) -> Result<(), DomainError>;
}
