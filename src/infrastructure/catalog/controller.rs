//! Catalog listing controller

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::catalog::{CatalogApi, CatalogItem, DEFAULT_PAGE_SIZE};

/// Loading, error and item state of the catalog screen
pub struct CatalogController {
    api: Arc<dyn CatalogApi>,
    page_size: u32,
    items: Vec<CatalogItem>,
    loading: bool,
    error: Option<String>,
}

impl CatalogController {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: Arc<dyn CatalogApi>, page_size: u32) -> Self {
        Self {
            api,
            page_size,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the first page; previous items are kept when it fails
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.fetch_page(self.page_size, 0).await {
            Ok(page) => {
                info!(items = page.results.len(), total = page.count, "Catalog loaded");
                self.items = page.results;
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.error = Some(format!("Failed to load: {}", e.message()));
            }
        }

        self.loading = false;
    }

    pub async fn retry(&mut self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogPage, MockCatalogApi};
    use crate::domain::DomainError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn page() -> CatalogPage {
        CatalogPage {
            count: 1,
            next: None,
            previous: None,
            results: vec![CatalogItem::new(
                "pikachu",
                "https://pokeapi.co/api/v2/pokemon/25/",
            )],
        }
    }

    #[tokio::test]
    async fn test_load() {
        let mut api = MockCatalogApi::new();
        api.expect_fetch_page()
            .with(eq(DEFAULT_PAGE_SIZE), eq(0))
            .times(1)
            .returning(|_, _| Ok(page()));

        let mut controller = CatalogController::new(Arc::new(api));
        controller.load().await;

        assert!(!controller.is_loading());
        assert!(controller.error().is_none());
        assert_eq!(controller.items()[0].id(), 25);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let mut api = MockCatalogApi::new();
        let mut seq = Sequence::new();
        api.expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(DomainError::network("timed out")));
        api.expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page()));

        let mut controller = CatalogController::with_page_size(Arc::new(api), 10);

        controller.load().await;
        assert_eq!(controller.error(), Some("Failed to load: timed out"));
        assert!(controller.items().is_empty());
        assert!(!controller.is_loading());

        controller.retry().await;
        assert!(controller.error().is_none());
        assert_eq!(controller.items().len(), 1);
    }
}
