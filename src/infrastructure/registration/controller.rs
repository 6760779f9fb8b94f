//! Registration controller

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::registration::{
    FormEvent, FormState, RegistrationPhase, RegistrationState, SubmitOutcome,
};
use crate::domain::user::{PersistedUser, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

pub(crate) const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already registered";
pub(crate) const REGISTRATION_FAILED_MESSAGE: &str = "Could not complete the registration";

/// Check the email is free, then register the form's account
pub async fn register_form<R: UserRepository>(
    service: &UserService<R>,
    form: &FormState,
) -> Result<PersistedUser, DomainError> {
    if service.email_exists(&form.email).await? {
        return Err(DomainError::conflict(format!(
            "Email '{}' is already registered",
            form.email
        )));
    }

    service.register(form).await
}

/// State machine behind the registration screen
#[derive(Debug)]
pub struct RegistrationController<R: UserRepository> {
    service: Arc<UserService<R>>,
    state: RegistrationState,
}

impl<R: UserRepository> RegistrationController<R> {
    pub fn new(service: Arc<UserService<R>>) -> Self {
        Self {
            service,
            state: RegistrationState::default(),
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn service(&self) -> Arc<UserService<R>> {
        Arc::clone(&self.service)
    }

    /// Apply a screen event; ignored while a submit is in flight
    pub fn apply(&mut self, event: FormEvent) -> &RegistrationState {
        if self.state.is_submitting() {
            debug!(?event, "Ignoring form event while submitting");
            return &self.state;
        }

        let form = std::mem::take(&mut self.state.form);
        self.state.form = form.apply(event);
        &self.state
    }

    /// Gate and validate a submit.
    ///
    /// On success the controller is left in `Submitting` and the snapshot to
    /// register is returned. Otherwise the outcome to report is returned and
    /// the repository must not be called.
    pub fn begin_submit(&mut self) -> Result<FormState, SubmitOutcome> {
        if self.state.is_submitting() {
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        if !self.state.form.accepts_terms {
            return Err(SubmitOutcome::TermsNotAccepted);
        }

        let errors = self.state.form.validate();
        if !errors.is_empty() {
            debug!(fields = errors.len(), "Registration form rejected");
            let form = std::mem::take(&mut self.state.form);
            self.state.form = form.with_errors(errors.clone());
            return Err(SubmitOutcome::Invalid(errors));
        }

        self.state.phase = RegistrationPhase::Submitting;
        self.state.banner = None;

        Ok(self.state.form.clone())
    }

    /// Fold the repository result back into the state
    pub fn finish_submit(&mut self, result: Result<PersistedUser, DomainError>) -> SubmitOutcome {
        self.state.phase = RegistrationPhase::Editing;

        match result {
            Ok(user) => {
                let id = user.id();
                info!(user_id = %id, "Registration completed");

                self.state.form = FormState::default();
                self.state.banner = None;
                self.state.last_registered = Some(user);

                SubmitOutcome::Registered { id }
            }
            Err(e) if e.is_conflict() => {
                debug!("Registration rejected: {}", e);
                self.state.banner = Some(DUPLICATE_EMAIL_MESSAGE.to_string());

                SubmitOutcome::DuplicateEmail {
                    message: DUPLICATE_EMAIL_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                self.state.banner = Some(REGISTRATION_FAILED_MESSAGE.to_string());

                SubmitOutcome::Failed {
                    message: REGISTRATION_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Run a whole submit in place
    pub async fn submit(&mut self) -> SubmitOutcome {
        let form = match self.begin_submit() {
            Ok(form) => form,
            Err(outcome) => return outcome,
        };

        let result = register_form(&self.service, &form).await;
        self.finish_submit(result)
    }

    /// Fresh form, no banner, no summary
    pub fn reset(&mut self) {
        if self.state.is_submitting() {
            return;
        }

        self.state = RegistrationState::default();
    }
}
