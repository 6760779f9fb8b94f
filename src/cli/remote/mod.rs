//! Remote command - calls the remote user API

use anyhow::bail;
use clap::Subcommand;

use crate::cli::register::parse_genre;
use crate::cli::GlobalArgs;
use crate::domain::user::{FavoriteGenre, NewUser, UserProfile};
use crate::infrastructure::user::RemoteUserClient;

#[derive(Subcommand, Clone, Debug)]
pub enum RemoteCommand {
    /// List users known to the remote API
    List,

    /// Register a user remotely
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long = "genre", value_parser = parse_genre)]
        genres: Vec<FavoriteGenre>,

        #[arg(long)]
        photo: Option<String>,
    },

    /// Log in against the remote API
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

/// Run a remote subcommand
pub async fn run(global: &GlobalArgs, command: RemoteCommand) -> anyhow::Result<()> {
    let config = crate::cli::load_config(global)?;
    let client = RemoteUserClient::new(
        config.remote_api.base_url.clone(),
        config.remote_api.timeout(),
    )?;

    match command {
        RemoteCommand::List => {
            let profiles: Vec<UserProfile> = client
                .list()
                .await?
                .into_iter()
                .map(|u| UserProfile::from(&u.into_persisted()))
                .collect();

            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
        RemoteCommand::Register {
            name,
            email,
            password,
            phone,
            genres,
            photo,
        } => {
            let user = NewUser {
                name,
                email,
                password,
                phone,
                favorite_genres: genres.into_iter().collect(),
                profile_photo: photo,
            };

            let id = client.register(&user).await?;
            println!("Registered remote account #{}", id);
        }
        RemoteCommand::Login { email, password } => match client.login(&email, &password).await? {
            Some(user) => {
                let profile = UserProfile::from(&user.into_persisted());
                println!("{}", serde_json::to_string_pretty(&profile)?);
            }
            None => bail!(crate::domain::login::INVALID_CREDENTIALS_MESSAGE),
        },
    }

    Ok(())
}
