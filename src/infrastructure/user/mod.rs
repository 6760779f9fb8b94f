//! User infrastructure module
//!
//! SQLite-backed user repository, password storage policies, the user
//! service used by the registration and login controllers, and the client
//! for the remote user API.

mod password;
mod remote;
mod service;
mod sqlite_repository;

pub use password::{hasher_for, Argon2Hasher, PasswordHasher, PlaintextPasswords};
pub use remote::{RemoteUser, RemoteUserClient};
pub use service::UserService;
pub use sqlite_repository::SqliteUserRepository;
