//! Display projection of a registered user

use serde::Serialize;

use super::entity::PersistedUser;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// What the profile and summary screens show for an account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub favorite_genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub registered_on: String,
}

impl From<&PersistedUser> for UserProfile {
    fn from(user: &PersistedUser) -> Self {
        let phone = Some(user.phone().trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            phone,
            favorite_genres: user
                .favorite_genres()
                .iter()
                .map(|g| g.display_name().to_string())
                .collect(),
            profile_photo: user.profile_photo().map(str::to_string),
            registered_on: user.registered_at().format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{FavoriteGenre, NewUser, UserId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_profile_projection() {
        let registered_at = Utc.with_ymd_and_hms(2024, 3, 9, 15, 30, 0).unwrap();
        let user = PersistedUser::restore(
            UserId::new(4),
            NewUser {
                name: "Ana Lopez".to_string(),
                email: "ana@duoc.cl".to_string(),
                password: "Abcdef1234!".to_string(),
                phone: "  ".to_string(),
                favorite_genres: [FavoriteGenre::History, FavoriteGenre::Action]
                    .into_iter()
                    .collect(),
                profile_photo: Some("content://photos/1".to_string()),
            },
            registered_at,
        );

        let profile = UserProfile::from(&user);

        assert_eq!(profile.id, 4);
        assert_eq!(profile.phone, None);
        assert_eq!(profile.favorite_genres, vec!["Acción", "Historia"]);
        assert_eq!(profile.registered_on, "09/03/2024");
        assert_eq!(profile.profile_photo.as_deref(), Some("content://photos/1"));
    }
}
