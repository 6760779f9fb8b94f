//! Login controller holding the authenticated session

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::login::{LoginEvent, LoginForm, LoginOutcome, INVALID_CREDENTIALS_MESSAGE};
use crate::domain::user::{PersistedUser, UserProfile, UserRepository};
use crate::infrastructure::user::UserService;

#[derive(Debug)]
pub struct LoginController<R: UserRepository> {
    service: Arc<UserService<R>>,
    form: LoginForm,
    user: Option<PersistedUser>,
}

impl<R: UserRepository> LoginController<R> {
    pub fn new(service: Arc<UserService<R>>) -> Self {
        Self {
            service,
            form: LoginForm::default(),
            user: None,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// The signed-in user, if any
    pub fn authenticated_user(&self) -> Option<&PersistedUser> {
        self.user.as_ref()
    }

    /// Profile view of the signed-in user
    pub fn profile(&self) -> Option<UserProfile> {
        self.user.as_ref().map(UserProfile::from)
    }

    pub fn apply(&mut self, event: LoginEvent) -> &LoginForm {
        let form = std::mem::take(&mut self.form);
        self.form = form.apply(event);
        &self.form
    }

    /// Validate the form and check the credentials against the store
    pub async fn attempt_login(&mut self) -> LoginOutcome {
        if let Err(e) = self.form.validate() {
            return self.reject(e.to_string());
        }

        self.form.loading = true;
        self.form.error_message = None;

        let result = self
            .service
            .verify_login(&self.form.email, &self.form.password)
            .await;

        self.form.loading = false;

        match result {
            Ok(Some(user)) => {
                info!(user_id = %user.id(), "User logged in");
                self.user = Some(user.clone());
                LoginOutcome::Authenticated(user)
            }
            Ok(None) => self.reject(INVALID_CREDENTIALS_MESSAGE.to_string()),
            Err(e) => {
                error!(error = %e, "Login failed");
                self.reject(format!("Login failed: {}", e.message()))
            }
        }
    }

    /// Forget the session and start over with a blank form
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id(), "User logged out");
        }
        self.form = LoginForm::default();
    }

    fn reject(&mut self, message: String) -> LoginOutcome {
        self.form.error_message = Some(message.clone());
        LoginOutcome::Rejected { message }
    }
}
