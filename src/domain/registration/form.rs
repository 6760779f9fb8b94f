//! Registration form snapshot
//!
//! [`FormState`] is an immutable value: every [`FormEvent`] produces a new
//! snapshot through [`FormState::apply`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::domain::user::{
    validate_email, validate_favorite_genres, validate_name, validate_password,
    validate_password_confirmation, validate_phone, FavoriteGenre, UserValidationError,
};

/// Input fields that carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Password,
    PasswordConfirm,
    Phone,
    FavoriteGenres,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirm => "password_confirm",
            Self::Phone => "phone",
            Self::FavoriteGenres => "favorite_genres",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current message per field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record the result of one validator
    pub fn record(&mut self, field: FormField, result: Result<(), UserValidationError>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e.to_string());
            }
        }
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// A single user interaction on the registration screen
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    PasswordConfirmChanged(String),
    /// Ignored when the value contains anything but digits
    PhoneChanged(String),
    GenreToggled(FavoriteGenre),
    TermsAccepted(bool),
    PasswordVisibilityToggled,
    PasswordConfirmVisibilityToggled,
    ProfilePhotoChanged(Option<String>),
}

/// Snapshot of the registration screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub phone: String,
    pub show_password: bool,
    pub show_password_confirm: bool,
    pub favorite_genres: BTreeSet<FavoriteGenre>,
    pub profile_photo: Option<String>,
    pub accepts_terms: bool,
    pub field_errors: FieldErrors,
}

impl FormState {
    /// Produce the snapshot that follows `event`.
    ///
    /// Editing a field clears that field's message; it is not re-validated
    /// until the next submit.
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::NameChanged(value) => {
                self.name = value;
                self.field_errors.clear(FormField::Name);
            }
            FormEvent::EmailChanged(value) => {
                self.email = value;
                self.field_errors.clear(FormField::Email);
            }
            FormEvent::PasswordChanged(value) => {
                self.password = value;
                self.field_errors.clear(FormField::Password);
            }
            FormEvent::PasswordConfirmChanged(value) => {
                self.password_confirm = value;
                self.field_errors.clear(FormField::PasswordConfirm);
            }
            FormEvent::PhoneChanged(value) => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.phone = value;
                    self.field_errors.clear(FormField::Phone);
                }
            }
            FormEvent::GenreToggled(genre) => {
                if !self.favorite_genres.remove(&genre) {
                    self.favorite_genres.insert(genre);
                }
                self.field_errors.clear(FormField::FavoriteGenres);
            }
            FormEvent::TermsAccepted(accepted) => self.accepts_terms = accepted,
            FormEvent::PasswordVisibilityToggled => self.show_password = !self.show_password,
            FormEvent::PasswordConfirmVisibilityToggled => {
                self.show_password_confirm = !self.show_password_confirm
            }
            FormEvent::ProfilePhotoChanged(photo) => self.profile_photo = photo,
        }

        self
    }

    /// Run every field rule and collect all messages at once
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        errors.record(FormField::Name, validate_name(&self.name));
        errors.record(FormField::Email, validate_email(&self.email));
        errors.record(FormField::Password, validate_password(&self.password));
        errors.record(
            FormField::PasswordConfirm,
            validate_password_confirmation(&self.password, &self.password_confirm),
        );
        errors.record(FormField::Phone, validate_phone(&self.phone));
        errors.record(
            FormField::FavoriteGenres,
            validate_favorite_genres(&self.favorite_genres),
        );

        errors
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.field_errors = errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState::default()
            .apply(FormEvent::NameChanged("Ana Lopez".to_string()))
            .apply(FormEvent::EmailChanged("ana@duoc.cl".to_string()))
            .apply(FormEvent::PasswordChanged("Abcdef1234!".to_string()))
            .apply(FormEvent::PasswordConfirmChanged("Abcdef1234!".to_string()))
            .apply(FormEvent::GenreToggled(FavoriteGenre::Action))
            .apply(FormEvent::TermsAccepted(true))
    }

    #[test]
    fn test_default_form_reports_every_required_field() {
        let errors = FormState::default().validate();

        assert_eq!(errors.len(), 5);
        assert!(errors.get(FormField::Name).is_some());
        assert!(errors.get(FormField::Email).is_some());
        assert!(errors.get(FormField::Password).is_some());
        assert!(errors.get(FormField::PasswordConfirm).is_some());
        assert!(errors.get(FormField::FavoriteGenres).is_some());
        // Phone is optional
        assert!(errors.get(FormField::Phone).is_none());
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let form = FormState::default();
        let errors = form.validate();
        let form = form.with_errors(errors);

        let form = form.apply(FormEvent::EmailChanged("x".to_string()));

        assert!(form.field_errors.get(FormField::Email).is_none());
        assert!(form.field_errors.get(FormField::Name).is_some());
        assert_eq!(form.email, "x");
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        let form = FormState::default().apply(FormEvent::PhoneChanged("5691".to_string()));
        let form = form.apply(FormEvent::PhoneChanged("5691a".to_string()));

        assert_eq!(form.phone, "5691");

        let form = form.apply(FormEvent::PhoneChanged(String::new()));
        assert_eq!(form.phone, "");
    }

    #[test]
    fn test_phone_accepts_ascii_digits_only() {
        let form = FormState::default()
            .apply(FormEvent::PhoneChanged("56912345".to_string()))
            .apply(FormEvent::PhoneChanged("\u{0665}\u{0666}\u{0669}\u{0661}".to_string()));

        assert_eq!(form.phone, "56912345");
    }

    #[test]
    fn test_genre_toggle() {
        let form = FormState::default()
            .apply(FormEvent::GenreToggled(FavoriteGenre::Horror))
            .apply(FormEvent::GenreToggled(FavoriteGenre::Action))
            .apply(FormEvent::GenreToggled(FavoriteGenre::Horror));

        assert_eq!(form.favorite_genres.len(), 1);
        assert!(form.favorite_genres.contains(&FavoriteGenre::Action));
    }

    #[test]
    fn test_visibility_toggles() {
        let form = FormState::default()
            .apply(FormEvent::PasswordVisibilityToggled)
            .apply(FormEvent::PasswordConfirmVisibilityToggled)
            .apply(FormEvent::PasswordConfirmVisibilityToggled);

        assert!(form.show_password);
        assert!(!form.show_password_confirm);
    }

    #[test]
    fn test_mismatched_confirmation() {
        let form = valid_form().apply(FormEvent::PasswordConfirmChanged("Abcdef1234?".to_string()));
        let errors = form.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::PasswordConfirm),
            Some("Passwords do not match")
        );
    }
}
