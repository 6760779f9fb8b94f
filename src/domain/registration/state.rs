//! Registration screen state machine values

use crate::domain::navigation::Route;
use crate::domain::user::{PersistedUser, UserId};

use super::form::{FieldErrors, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPhase {
    #[default]
    Editing,
    /// A submit is in flight; edits and further submits are ignored
    Submitting,
}

/// Everything the registration and summary screens render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationState {
    pub phase: RegistrationPhase,
    pub form: FormState,
    /// Form-level message (duplicate email, persistence failure)
    pub banner: Option<String>,
    /// The account created by the last successful submit
    pub last_registered: Option<PersistedUser>,
}

impl RegistrationState {
    pub fn is_submitting(&self) -> bool {
        self.phase == RegistrationPhase::Submitting
    }
}

/// Result of a submit attempt, delivered exactly once
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Registered { id: UserId },
    TermsNotAccepted,
    AlreadySubmitting,
    Invalid(FieldErrors),
    DuplicateEmail { message: String },
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    /// Screen to show after this outcome, if the UI should move on
    pub fn next_route(&self) -> Option<Route> {
        match self {
            Self::Registered { .. } => Some(Route::Summary),
            _ => None,
        }
    }

    /// Banner text for form-level failures
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::DuplicateEmail { message } | Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_routes() {
        let ok = SubmitOutcome::Registered { id: UserId::new(1) };
        assert!(ok.is_success());
        assert_eq!(ok.next_route(), Some(Route::Summary));

        let dup = SubmitOutcome::DuplicateEmail {
            message: "taken".to_string(),
        };
        assert_eq!(dup.next_route(), None);
        assert_eq!(dup.message(), Some("taken"));
        assert_eq!(SubmitOutcome::TermsNotAccepted.message(), None);
    }

    #[test]
    fn test_initial_state() {
        let state = RegistrationState::default();
        assert_eq!(state.phase, RegistrationPhase::Editing);
        assert!(!state.is_submitting());
        assert!(state.last_registered.is_none());
    }
}
