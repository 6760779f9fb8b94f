//! reqwest-backed catalog client

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::catalog::{CatalogApi, CatalogPage};
use crate::domain::DomainError;

/// Catalog client issuing `GET {base_url}{resource}?limit=&offset=`
#[derive(Debug, Clone)]
pub struct CatalogHttpClient {
    client: reqwest::Client,
    base_url: String,
    resource: String,
}

impl CatalogHttpClient {
    pub fn new(
        base_url: impl Into<String>,
        resource: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            resource: resource.into().trim_matches('/').to_string(),
        })
    }

    fn page_url(&self, limit: u32, offset: u32) -> String {
        format!(
            "{}{}?limit={}&offset={}",
            self.base_url, self.resource, limit, offset
        )
    }
}

#[async_trait]
impl CatalogApi for CatalogHttpClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, DomainError> {
        let url = self.page_url(limit, offset);
        debug!(%url, "Fetching catalog page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::network(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::network(format!("Failed to parse response: {}", e)))
    }
}
