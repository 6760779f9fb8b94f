//! Catalog listing types

use serde::{Deserialize, Serialize};

const ARTWORK_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/PokeAPI/sprites@master/sprites/pokemon/other/official-artwork";

/// One page of the public catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<CatalogItem>,
}

impl CatalogPage {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A named entry with the URL of its detail resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub url: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id taken from the last path segment of `url`; 0 when absent
    pub fn id(&self) -> u32 {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }

    pub fn image_url(&self) -> String {
        format!("{}/{}.png", ARTWORK_BASE_URL, self.id())
    }
}
