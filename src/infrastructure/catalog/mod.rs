//! Catalog infrastructure module

mod controller;
mod http_client;

pub use controller::CatalogController;
pub use http_client::CatalogHttpClient;
