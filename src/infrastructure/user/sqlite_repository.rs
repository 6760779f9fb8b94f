//! SQLite user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::user::{genres_from_column, NewUser, PersistedUser, UserId, UserRepository};
use crate::domain::DomainError;

const USER_COLUMNS: &str =
    "id, name, email, password, phone, favorite_genres, profile_photo, registered_at";

/// SQLite implementation of UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository on the shared store handle
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<PersistedUser>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<PersistedUser>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = ? LIMIT 1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check email: {}", e)))
    }

    async fn create(&self, user: NewUser) -> Result<PersistedUser, DomainError> {
        let registered_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, phone, favorite_genres,
                               profile_photo, registered_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.phone)
        .bind(user.favorite_genres_column())
        .bind(user.profile_photo.as_deref())
        .bind(registered_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let unique_violation = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());

            if unique_violation {
                DomainError::conflict(format!("Email '{}' is already registered", user.email))
            } else {
                DomainError::storage(format!("Failed to create user: {}", e))
            }
        })?;

        let id = UserId::new(result.last_insert_rowid());

        Ok(PersistedUser::restore(id, user, registered_at))
    }

    async fn list(&self) -> Result<Vec<PersistedUser>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY registered_at DESC, id DESC",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_user(row: &SqliteRow) -> Result<PersistedUser, DomainError> {
    let column = |e: sqlx::Error| DomainError::storage(format!("Invalid user row: {}", e));

    let id: i64 = row.try_get("id").map_err(column)?;
    let favorite_genres: String = row.try_get("favorite_genres").map_err(column)?;
    let registered_at: DateTime<Utc> = row.try_get("registered_at").map_err(column)?;

    let user = NewUser {
        name: row.try_get("name").map_err(column)?,
        email: row.try_get("email").map_err(column)?,
        password: row.try_get("password").map_err(column)?,
        phone: row.try_get("phone").map_err(column)?,
        favorite_genres: genres_from_column(&favorite_genres),
        profile_photo: row.try_get("profile_photo").map_err(column)?,
    };

    Ok(PersistedUser::restore(UserId::new(id), user, registered_at))
}
