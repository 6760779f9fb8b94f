//! Domain layer - Core business logic and entities

pub mod catalog;
pub mod error;
pub mod login;
pub mod navigation;
pub mod preferences;
pub mod registration;
pub mod user;

pub use catalog::{CatalogApi, CatalogItem, CatalogPage};
pub use error::DomainError;
pub use login::{LoginEvent, LoginForm, LoginOutcome};
pub use navigation::Route;
pub use preferences::PreferenceStore;
pub use registration::{
    FieldErrors, FormEvent, FormField, FormState, RegistrationPhase, RegistrationState,
    SubmitOutcome,
};
pub use user::{
    FavoriteGenre, NewUser, PersistedUser, UserId, UserProfile, UserRepository,
    UserValidationError,
};
