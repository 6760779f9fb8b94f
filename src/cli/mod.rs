//! CLI module for Embrollo
//!
//! Each subcommand drives one screen's controller against the configured
//! store or remote service and prints the result.

pub mod catalog;
pub mod login;
pub mod migrate;
pub mod register;
pub mod remote;
pub mod special_mode;
pub mod users;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::{create_app_context, AppContext};

/// Embrollo - account registration, login and catalog client
#[derive(Parser)]
#[command(name = "embrollo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Database URL (overrides config)
    #[arg(long, global = true)]
    pub database_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new account
    Register(register::RegisterArgs),

    /// Log in and show the account profile
    Login(login::LoginArgs),

    /// List registered accounts, newest first
    Users(users::UsersArgs),

    /// Show the first page of the public catalog
    Catalog(catalog::CatalogArgs),

    /// Talk to the remote user API
    #[command(subcommand)]
    Remote(remote::RemoteCommand),

    /// Show or toggle special mode
    #[command(subcommand)]
    SpecialMode(special_mode::SpecialModeCommand),

    /// Apply pending schema migrations
    Migrate,
}

/// Read configuration files, `.env` and `APP__*` variables.
///
/// A source that fails to parse is an error, never a fallback to defaults.
pub fn read_config(global: &GlobalArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = &global.database_url {
        config.database.url = url.clone();
    }

    Ok(config)
}

/// Load configuration and install logging
pub fn load_config(global: &GlobalArgs) -> anyhow::Result<AppConfig> {
    let config = read_config(global)?;
    logging::init_logging(&config.logging);
    Ok(config)
}

/// Load configuration, install logging and open the store
pub async fn bootstrap(global: &GlobalArgs) -> anyhow::Result<AppContext> {
    let config = load_config(global)?;
    create_app_context(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordStorage;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "embrollo",
            "register",
            "--name",
            "Ana Lopez",
            "--email",
            "ana@duoc.cl",
            "--password",
            "Abcdef1234!",
            "--genre",
            "accion",
            "--genre",
            "TERROR",
            "--accept-terms",
        ])
        .unwrap();

        match cli.command {
            Command::Register(args) => {
                assert_eq!(args.genres.len(), 2);
                assert!(args.accept_terms);
                assert!(args.password_confirm.is_none());
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn test_bad_config_value_is_an_error() {
        // SAFETY: no other test reads or writes APP__* variables
        unsafe {
            std::env::set_var("APP__SECURITY__PASSWORD_STORAGE", "argon2");
            std::env::set_var("APP__DATABASE__MAX_CONNECTIONS", "five");
        }

        let result = read_config(&GlobalArgs::default());

        unsafe {
            std::env::remove_var("APP__DATABASE__MAX_CONNECTIONS");
        }
        let config = read_config(&GlobalArgs {
            database_url: Some("sqlite::memory:".to_string()),
        });

        unsafe {
            std::env::remove_var("APP__SECURITY__PASSWORD_STORAGE");
        }

        assert!(result.is_err());
        let config = config.unwrap();
        assert_eq!(config.security.password_storage, PasswordStorage::Argon2);
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[test]
    fn test_parse_nested_commands() {
        let cli = Cli::try_parse_from([
            "embrollo",
            "--database-url",
            "sqlite://other.db",
            "special-mode",
            "toggle",
        ])
        .unwrap();

        assert_eq!(cli.global.database_url.as_deref(), Some("sqlite://other.db"));
        assert!(matches!(
            cli.command,
            Command::SpecialMode(special_mode::SpecialModeCommand::Toggle)
        ));

        assert!(Cli::try_parse_from(["embrollo", "register", "--genre", "ROMANCE"]).is_err());
    }
}
