//! User domain
//!
//! This module provides domain types and traits for registered accounts,
//! including the persisted entity, favorite genres, field validation and the
//! repository trait.

mod entity;
mod genre;
mod profile;
mod repository;
mod validation;

pub use entity::{NewUser, PersistedUser, UserId};
pub use genre::{genres_from_column, genres_to_column, FavoriteGenre, UnknownGenre};
pub use profile::UserProfile;
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_favorite_genres, validate_login_email, validate_login_password,
    validate_name, validate_password, validate_password_confirmation, validate_phone,
    UserValidationError, EMAIL_DOMAIN, PASSWORD_SPECIAL_CHARACTERS,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
