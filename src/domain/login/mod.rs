//! Login domain

use crate::domain::navigation::Route;
use crate::domain::user::{
    validate_login_email, validate_login_password, PersistedUser, UserValidationError,
};

/// Message shown when no account matches the credentials
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    RememberSessionChanged(bool),
    PasswordVisibilityToggled,
}

/// Snapshot of the login screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_session: bool,
    pub show_password: bool,
    pub error_message: Option<String>,
    pub loading: bool,
}

impl LoginForm {
    /// Credential edits clear the current error message
    pub fn apply(mut self, event: LoginEvent) -> Self {
        match event {
            LoginEvent::EmailChanged(value) => {
                self.email = value;
                self.error_message = None;
            }
            LoginEvent::PasswordChanged(value) => {
                self.password = value;
                self.error_message = None;
            }
            LoginEvent::RememberSessionChanged(value) => self.remember_session = value,
            LoginEvent::PasswordVisibilityToggled => self.show_password = !self.show_password,
        }

        self
    }

    /// First failing rule, email before password
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_login_email(&self.email)?;
        validate_login_password(&self.password)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(PersistedUser),
    Rejected { message: String },
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn next_route(&self) -> Option<Route> {
        match self {
            Self::Authenticated(_) => Some(Route::Home),
            Self::Rejected { .. } => None,
        }
    }
}
