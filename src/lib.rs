//! Embrollo
//!
//! Account registration and login backed by a local SQLite store, plus
//! clients for a public item catalog and a remote user API.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use tracing::info;

use domain::catalog::CatalogApi;
use domain::preferences::PreferenceStore;
use infrastructure::{
    catalog::CatalogHttpClient,
    preferences::SqlitePreferenceStore,
    storage,
    user::{hasher_for, SqliteUserRepository, UserService},
};

/// Services shared by every command, built once per process
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub pool: SqlitePool,
    pub users: Arc<UserService<SqliteUserRepository>>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub catalog: Arc<dyn CatalogApi>,
}

/// Open the configured store and wire every service onto it
pub async fn create_app_context(config: &AppConfig) -> anyhow::Result<AppContext> {
    let pool = storage::connect(&config.database.url, config.database.max_connections).await?;
    create_app_context_with_pool(config, pool)
}

/// Wire every service onto an already opened store
pub fn create_app_context_with_pool(
    config: &AppConfig,
    pool: SqlitePool,
) -> anyhow::Result<AppContext> {
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let users = Arc::new(UserService::new(
        repository,
        hasher_for(config.security.password_storage),
    ));

    let catalog = CatalogHttpClient::new(
        config.catalog.base_url.clone(),
        config.catalog.resource.clone(),
        config.catalog.timeout(),
    )?;

    info!(
        password_storage = ?config.security.password_storage,
        "Application context ready"
    );

    Ok(AppContext {
        config: config.clone(),
        preferences: Arc::new(SqlitePreferenceStore::new(pool.clone())),
        pool,
        users,
        catalog: Arc::new(catalog),
    })
}
