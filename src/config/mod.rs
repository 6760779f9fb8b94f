//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CatalogConfig, DatabaseConfig, LogFormat, LoggingConfig, PasswordStorage,
    RemoteApiConfig, SecurityConfig,
};
