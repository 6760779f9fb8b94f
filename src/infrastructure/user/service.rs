//! User service for registration and login

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::registration::FormState;
use crate::domain::user::{NewUser, PersistedUser, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// User service mediating between the registration form and the store
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Check whether an email already belongs to an account
    pub async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        self.repository.email_exists(email).await
    }

    /// Persist the account described by a form.
    ///
    /// Forms failing any field rule are refused with a validation error.
    ///
    /// The existence check here and the insert are separate statements; a
    /// concurrent registration of the same email is caught by the store's
    /// unique constraint and reported as the same conflict.
    pub async fn register(&self, form: &FormState) -> Result<PersistedUser, DomainError> {
        let errors = form.validate();
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
            return Err(DomainError::validation(format!(
                "Invalid fields: {}",
                fields.join(", ")
            )));
        }

        if self.repository.email_exists(&form.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                form.email
            )));
        }

        let password = self.hasher.hash(&form.password)?;

        let user = NewUser {
            name: form.name.clone(),
            email: form.email.clone(),
            password,
            phone: form.phone.clone(),
            favorite_genres: form.favorite_genres.clone(),
            profile_photo: form.profile_photo.clone(),
        };

        let created = self.repository.create(user).await?;

        info!(user_id = %created.id(), "Registered new account");

        Ok(created)
    }

    /// Find the account matching an email and password
    pub async fn verify_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<PersistedUser>, DomainError> {
        let user = match self.repository.get_by_email(email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password()) {
            warn!(user_id = %user.id(), "Rejected login with wrong password");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<PersistedUser>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<PersistedUser>, DomainError> {
        self.repository.get_by_email(email).await
    }

    /// Profile of the account registered under `email`
    pub async fn profile(&self, email: &str) -> Result<UserProfile, DomainError> {
        self.repository
            .get_by_email(email)
            .await?
            .map(|user| UserProfile::from(&user))
            .ok_or_else(|| DomainError::not_found(format!("No account for '{}'", email)))
    }

    /// List all users, newest first
    pub async fn list(&self) -> Result<Vec<PersistedUser>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::FormEvent;
    use crate::domain::user::FavoriteGenre;
    use crate::infrastructure::storage::connect_in_memory;
    use crate::infrastructure::user::password::{Argon2Hasher, PlaintextPasswords};
    use crate::infrastructure::user::SqliteUserRepository;

    async fn create_service() -> UserService<SqliteUserRepository> {
        let repository = Arc::new(SqliteUserRepository::new(connect_in_memory().await.unwrap()));
        UserService::new(repository, Arc::new(PlaintextPasswords))
    }

    fn form(email: &str) -> FormState {
        FormState::default()
            .apply(FormEvent::NameChanged("Ana Lopez".to_string()))
            .apply(FormEvent::EmailChanged(email.to_string()))
            .apply(FormEvent::PasswordChanged("Abcdef1234!".to_string()))
            .apply(FormEvent::PasswordConfirmChanged("Abcdef1234!".to_string()))
            .apply(FormEvent::GenreToggled(FavoriteGenre::Action))
            .apply(FormEvent::TermsAccepted(true))
    }

    #[tokio::test]
    async fn test_register() {
        let service = create_service().await;

        let user = service.register(&form("ana@duoc.cl")).await.unwrap();

        assert!(user.id().value() > 0);
        assert_eq!(user.favorite_genres_column(), "ACCION");
        assert_eq!(user.phone(), "");
        assert!(service.email_exists("ana@duoc.cl").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service().await;
        service.register(&form("a@duoc.cl")).await.unwrap();

        let result = service.register(&form("a@duoc.cl")).await;

        assert!(result.unwrap_err().is_conflict());
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_form() {
        let service = create_service().await;
        let form = form("ana@gmail.com").apply(FormEvent::PhoneChanged("123".to_string()));

        let err = service.register(&form).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(err.message(), "Invalid fields: email, phone");
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_profile() {
        let service = create_service().await;
        service.register(&form("ana@duoc.cl")).await.unwrap();

        let profile = service.profile("ana@duoc.cl").await.unwrap();
        assert_eq!(profile.favorite_genres, vec!["Acción"]);
        assert!(profile.phone.is_none());

        let missing = service.profile("bob@duoc.cl").await.unwrap_err();
        assert!(matches!(missing, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_verify_login() {
        let service = create_service().await;
        service.register(&form("ana@duoc.cl")).await.unwrap();

        let user = service.verify_login("ana@duoc.cl", "Abcdef1234!").await.unwrap();
        assert_eq!(user.unwrap().name(), "Ana Lopez");

        let wrong = service.verify_login("ana@duoc.cl", "abcdef1234!").await.unwrap();
        assert!(wrong.is_none());

        let unknown = service.verify_login("bob@duoc.cl", "Abcdef1234!").await.unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_argon2_policy_never_stores_plaintext() {
        let repository = Arc::new(SqliteUserRepository::new(connect_in_memory().await.unwrap()));
        let service = UserService::new(repository, Arc::new(Argon2Hasher::new()));

        let user = service.register(&form("ana@duoc.cl")).await.unwrap();
        assert_ne!(user.password(), "Abcdef1234!");

        let login = service.verify_login("ana@duoc.cl", "Abcdef1234!").await.unwrap();
        assert!(login.is_some());
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let service = create_service().await;

        let first = service.register(&form("a@duoc.cl")).await.unwrap();
        service.register(&form("b@duoc.cl")).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].email(), "b@duoc.cl");

        let fetched = service.get(first.id()).await.unwrap().unwrap();
        assert_eq!(fetched.email(), "a@duoc.cl");
        assert!(service.get_by_email("b@duoc.cl").await.unwrap().is_some());
    }
}
