//! User entity and related types

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::genre::{genres_to_column, FavoriteGenre};

/// Store-assigned user identifier. Always positive once persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user row that has not been inserted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Password in its stored form (see `PasswordHasher`)
    pub password: String,
    pub phone: String,
    pub favorite_genres: BTreeSet<FavoriteGenre>,
    pub profile_photo: Option<String>,
}

impl NewUser {
    /// Genres in their column form
    pub fn favorite_genres_column(&self) -> String {
        genres_to_column(&self.favorite_genres)
    }
}

/// A registered account as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedUser {
    id: UserId,
    name: String,
    email: String,
    /// Never exposed in serialization
    #[serde(skip_serializing, default)]
    password: String,
    phone: String,
    favorite_genres: BTreeSet<FavoriteGenre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_photo: Option<String>,
    registered_at: DateTime<Utc>,
}

impl PersistedUser {
    /// Rebuild a user from a stored row
    pub fn restore(id: UserId, user: NewUser, registered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
            phone: user.phone,
            favorite_genres: user.favorite_genres,
            profile_photo: user.profile_photo,
            registered_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn favorite_genres(&self) -> &BTreeSet<FavoriteGenre> {
        &self.favorite_genres
    }

    pub fn favorite_genres_column(&self) -> String {
        genres_to_column(&self.favorite_genres)
    }

    pub fn profile_photo(&self) -> Option<&str> {
        self.profile_photo.as_deref()
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            name: "Ana Lopez".to_string(),
            email: "ana@duoc.cl".to_string(),
            password: "Abcdef1234!".to_string(),
            phone: String::new(),
            favorite_genres: [FavoriteGenre::Action, FavoriteGenre::Horror]
                .into_iter()
                .collect(),
            profile_photo: None,
        }
    }

    #[test]
    fn test_restore() {
        let now = Utc::now();
        let user = PersistedUser::restore(UserId::new(3), new_user(), now);

        assert_eq!(user.id().value(), 3);
        assert_eq!(user.email(), "ana@duoc.cl");
        assert_eq!(user.registered_at(), now);
        assert_eq!(user.favorite_genres_column(), "ACCION,TERROR");
        assert!(user.profile_photo().is_none());
    }

    #[test]
    fn test_serialization_excludes_password() {
        let user = PersistedUser::restore(UserId::new(1), new_user(), Utc::now());

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("Abcdef1234!"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"id\":1"));
    }
}
