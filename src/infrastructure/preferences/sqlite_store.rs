//! Preference flags stored in the `settings` table

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::domain::preferences::PreferenceStore;
use crate::domain::DomainError;

#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
}

impl SqlitePreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, DomainError> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read setting '{}': {}", key, e)))?;

        Ok(value.map(|v| v == "true"))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(if value { "true" } else { "false" })
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to write setting '{}': {}", key, e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::connect_in_memory;

    #[tokio::test]
    async fn test_flag_round_trip() {
        let store = SqlitePreferenceStore::new(connect_in_memory().await.unwrap());

        assert_eq!(store.get_flag("modo_activado").await.unwrap(), None);

        store.set_flag("modo_activado", true).await.unwrap();
        assert_eq!(store.get_flag("modo_activado").await.unwrap(), Some(true));

        store.set_flag("modo_activado", false).await.unwrap();
        assert_eq!(store.get_flag("modo_activado").await.unwrap(), Some(false));
    }
}
