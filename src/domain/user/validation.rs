//! Registration and login field validation
//!
//! Every validator checks one field and reports the first rule it breaks.
//! The `Display` text of [`UserValidationError`] is the message shown next
//! to the field.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::genre::FavoriteGenre;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Only letters and spaces are allowed")]
    InvalidNameCharacter,

    #[error("Maximum {max} characters (current: {actual})")]
    NameTooLong { max: usize, actual: usize },

    #[error("Email is required")]
    EmptyEmail,

    #[error("Must be a valid @{domain} email")]
    InvalidEmail { domain: &'static str },

    #[error("Maximum {max} characters (current: {actual})")]
    EmailTooLong { max: usize, actual: usize },

    #[error("Minimum {min} characters (current: {actual})")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("Must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    #[error("Must contain at least one number")]
    PasswordMissingDigit,

    #[error("Must contain a special character ({})", PASSWORD_SPECIAL_CHARACTERS)]
    PasswordMissingSpecial,

    #[error("Please confirm the password")]
    EmptyPasswordConfirmation,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid phone number (minimum {0} digits)")]
    PhoneTooShort(usize),

    #[error("Invalid phone number (maximum {0} digits)")]
    PhoneTooLong(usize),

    #[error("Select at least one favorite genre")]
    NoFavoriteGenres,

    #[error("Password is required")]
    EmptyPassword,
}

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 60;
pub const MIN_PASSWORD_LENGTH: usize = 10;
pub const MIN_PHONE_LENGTH: usize = 8;
pub const MAX_PHONE_LENGTH: usize = 15;
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "@#$%!&*-_";

/// Institutional domain every account email must belong to
pub const EMAIL_DOMAIN: &str = "duoc.cl";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@duoc\.cl$").expect("Invalid regex pattern"));

/// Validate a full name
///
/// Rules:
/// - Cannot be blank
/// - Only letters and whitespace
/// - Maximum 100 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(UserValidationError::InvalidNameCharacter);
    }

    let length = name.chars().count();

    if length > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
            actual: length,
        });
    }

    Ok(())
}

/// Validate a registration email
///
/// Rules:
/// - Cannot be blank
/// - Local part of letters, digits and `+_.-`, domain exactly `duoc.cl`
/// - Maximum 60 characters
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail {
            domain: EMAIL_DOMAIN,
        });
    }

    let length = email.chars().count();

    if length > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong {
            max: MAX_EMAIL_LENGTH,
            actual: length,
        });
    }

    Ok(())
}

/// Validate a new password
///
/// Rules:
/// - Minimum 10 characters
/// - At least one uppercase, one lowercase, one digit
/// - At least one of `@#$%!&*-_`
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(UserValidationError::PasswordMissingUppercase);
    }

    if !password.chars().any(char::is_lowercase) {
        return Err(UserValidationError::PasswordMissingLowercase);
    }

    // Only 0-9 count as digits
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(UserValidationError::PasswordMissingDigit);
    }

    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c)) {
        return Err(UserValidationError::PasswordMissingSpecial);
    }

    Ok(())
}

/// Validate the confirmation field against the password
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), UserValidationError> {
    if confirmation.trim().is_empty() {
        return Err(UserValidationError::EmptyPasswordConfirmation);
    }

    if password != confirmation {
        return Err(UserValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Validate an optional phone number. An empty value is accepted.
pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    if phone.is_empty() {
        return Ok(());
    }

    let length = phone.chars().count();

    if length < MIN_PHONE_LENGTH {
        return Err(UserValidationError::PhoneTooShort(MIN_PHONE_LENGTH));
    }

    if length > MAX_PHONE_LENGTH {
        return Err(UserValidationError::PhoneTooLong(MAX_PHONE_LENGTH));
    }

    Ok(())
}

pub fn validate_favorite_genres(
    genres: &BTreeSet<FavoriteGenre>,
) -> Result<(), UserValidationError> {
    if genres.is_empty() {
        return Err(UserValidationError::NoFavoriteGenres);
    }

    Ok(())
}

/// Validate the email typed on the login screen. Looser than registration:
/// only the domain suffix is checked.
pub fn validate_login_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !email.ends_with(&format!("@{}", EMAIL_DOMAIN)) {
        return Err(UserValidationError::InvalidEmail {
            domain: EMAIL_DOMAIN,
        });
    }

    Ok(())
}

pub fn validate_login_password(password: &str) -> Result<(), UserValidationError> {
    if password.trim().is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests
    #[test]
    fn test_valid_names() {
        assert!(validate_name("Ana Lopez").is_ok());
        assert!(validate_name("José Núñez").is_ok());
        assert!(validate_name("a").is_ok());
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(validate_name(""), Err(UserValidationError::EmptyName));
        assert_eq!(validate_name("   "), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_name_with_digits() {
        assert_eq!(
            validate_name("Ana2"),
            Err(UserValidationError::InvalidNameCharacter)
        );
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_name(&long_name),
            Err(UserValidationError::NameTooLong {
                max: 100,
                actual: 101
            })
        );
        assert!(validate_name(&"a".repeat(100)).is_ok());
    }

    // Email tests
    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@duoc.cl").is_ok());
        assert!(validate_email("first.last+tag_1-x@duoc.cl").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(
            validate_email("user@gmail.com"),
            Err(UserValidationError::InvalidEmail { domain: "duoc.cl" })
        );
        assert!(validate_email("user@duoc.cl.evil.com").is_err());
        assert!(validate_email("us er@duoc.cl").is_err());
        assert!(validate_email("@duoc.cl").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@duoc.cl", "a".repeat(53));
        assert_eq!(
            validate_email(&email),
            Err(UserValidationError::EmailTooLong {
                max: 60,
                actual: 61
            })
        );
    }

    // Password tests
    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("Abcdef1234!").is_ok());
        assert!(validate_password("zZ9_zzzzzz").is_ok());
        for special in PASSWORD_SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdefgh1{}", special);
            assert!(validate_password(&password).is_ok(), "{}", password);
        }
    }

    #[test]
    fn test_short_passwords_always_fail() {
        for length in 0..MIN_PASSWORD_LENGTH {
            let password: String = "Ab1!Ab1!Ab1!".chars().take(length).collect();
            assert!(validate_password(&password).is_err(), "{}", password);
        }
    }

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(
            validate_password("Abc1!"),
            Err(UserValidationError::PasswordTooShort { min: 10, actual: 5 })
        );
        assert_eq!(
            validate_password("abcdefgh1!"),
            Err(UserValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_password("ABCDEFGH1!"),
            Err(UserValidationError::PasswordMissingLowercase)
        );
        assert_eq!(
            validate_password("Abcdefghi!"),
            Err(UserValidationError::PasswordMissingDigit)
        );
        assert_eq!(
            validate_password("Abcdefgh12"),
            Err(UserValidationError::PasswordMissingSpecial)
        );
    }

    #[test]
    fn test_password_digit_must_be_ascii() {
        assert_eq!(
            validate_password("Abcdefghi!\u{0663}"),
            Err(UserValidationError::PasswordMissingDigit)
        );
        assert!(validate_password("Abcdefghi!3").is_ok());
    }

    #[test]
    fn test_password_confirmation() {
        assert!(validate_password_confirmation("Abcdef1234!", "Abcdef1234!").is_ok());
        assert_eq!(
            validate_password_confirmation("Abcdef1234!", " "),
            Err(UserValidationError::EmptyPasswordConfirmation)
        );
        assert_eq!(
            validate_password_confirmation("Abcdef1234!", "abcdef1234!"),
            Err(UserValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("12345678").is_ok());
        assert!(validate_phone("123456789012345").is_ok());
        assert_eq!(
            validate_phone("1234567"),
            Err(UserValidationError::PhoneTooShort(8))
        );
        assert_eq!(
            validate_phone("1234567890123456"),
            Err(UserValidationError::PhoneTooLong(15))
        );
    }

    #[test]
    fn test_favorite_genres() {
        assert_eq!(
            validate_favorite_genres(&BTreeSet::new()),
            Err(UserValidationError::NoFavoriteGenres)
        );
        let genres: BTreeSet<_> = [FavoriteGenre::Action].into_iter().collect();
        assert!(validate_favorite_genres(&genres).is_ok());
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login_email("someone@duoc.cl").is_ok());
        assert_eq!(validate_login_email(""), Err(UserValidationError::EmptyEmail));
        assert!(validate_login_email("someone@gmail.com").is_err());
        assert!(validate_login_password("x").is_ok());
        assert_eq!(
            validate_login_password(""),
            Err(UserValidationError::EmptyPassword)
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            UserValidationError::PasswordMissingSpecial.to_string(),
            "Must contain a special character (@#$%!&*-_)"
        );
        assert_eq!(
            UserValidationError::InvalidEmail { domain: EMAIL_DOMAIN }.to_string(),
            "Must be a valid @duoc.cl email"
        );
    }
}
