//! Storage infrastructure - SQLite store handle and schema migrations
//!
//! One pool is opened per process and handed to every repository that needs
//! it.

pub mod migrations;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::DomainError;

pub use migrations::{run_store_migrations, Migration, SqliteMigrator};

/// Open the store at `url` (e.g. `sqlite://embrollo.db`), creating the file
/// when missing, and bring the schema up to date.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| DomainError::configuration(format!("Invalid database URL '{}': {}", url, e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to open database: {}", e)))?;

    info!("Database opened at {}", url);

    run_store_migrations(&pool).await?;

    Ok(pool)
}

/// Private in-memory store with the schema applied.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to a single connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, DomainError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(|e| DomainError::storage(format!("Failed to open in-memory database: {}", e)))?;

    run_store_migrations(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_has_schema() {
        let pool = connect_in_memory().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"settings".to_string()));
        assert!(tables.contains(&"_migrations".to_string()));
    }
}
