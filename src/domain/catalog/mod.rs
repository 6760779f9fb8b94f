//! Catalog domain
//!
//! Types and the client trait for the public item catalog shown on the
//! demo listing screen.

mod entity;

pub use entity::{CatalogItem, CatalogPage};

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Page size used by the listing screen
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Read access to the remote catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of items
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, DomainError>;
}
