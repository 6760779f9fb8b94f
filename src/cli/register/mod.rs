//! Register command - fills the registration form and submits it

use std::collections::BTreeSet;

use anyhow::bail;
use clap::Args;

use crate::cli::GlobalArgs;
use crate::domain::registration::{FormEvent, SubmitOutcome};
use crate::domain::user::{FavoriteGenre, UserProfile};
use crate::infrastructure::registration::RegistrationHandle;

#[derive(Args, Clone, Debug)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    /// Defaults to --password
    #[arg(long)]
    pub password_confirm: Option<String>,

    /// Digits only
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Favorite genre, repeatable (SUSPENSO, ACCION, MISTERIO, FICCION, TERROR, HISTORIA)
    #[arg(long = "genre", value_parser = parse_genre)]
    pub genres: Vec<FavoriteGenre>,

    /// Opaque reference to a profile photo
    #[arg(long)]
    pub photo: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}

pub(crate) fn parse_genre(value: &str) -> Result<FavoriteGenre, String> {
    value.to_uppercase().parse().map_err(|e| format!("{}", e))
}

impl RegisterArgs {
    fn events(&self) -> Vec<FormEvent> {
        let mut events = vec![
            FormEvent::NameChanged(self.name.clone()),
            FormEvent::EmailChanged(self.email.clone()),
            FormEvent::PasswordChanged(self.password.clone()),
            FormEvent::PasswordConfirmChanged(
                self.password_confirm
                    .clone()
                    .unwrap_or_else(|| self.password.clone()),
            ),
            FormEvent::PhoneChanged(self.phone.clone()),
            FormEvent::ProfilePhotoChanged(self.photo.clone()),
            FormEvent::TermsAccepted(self.accept_terms),
        ];

        let genres: BTreeSet<FavoriteGenre> = self.genres.iter().copied().collect();
        events.extend(genres.into_iter().map(FormEvent::GenreToggled));
        events
    }
}

/// Run the register command
pub async fn run(global: &GlobalArgs, args: RegisterArgs) -> anyhow::Result<()> {
    if !args.phone.chars().all(|c| c.is_ascii_digit()) {
        bail!("Phone must contain digits only");
    }

    let context = crate::cli::bootstrap(global).await?;
    let handle = RegistrationHandle::spawn(context.users.clone());

    for event in args.events() {
        handle.edit(event).await?;
    }

    match handle.submit().await? {
        SubmitOutcome::Registered { id } => {
            println!("Registered account #{}", id);
            if let Some(user) = handle.current().last_registered {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&UserProfile::from(&user))?
                );
            }
            Ok(())
        }
        SubmitOutcome::TermsNotAccepted => bail!("The terms must be accepted (--accept-terms)"),
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            bail!("Registration form has {} invalid field(s)", errors.len())
        }
        SubmitOutcome::AlreadySubmitting => bail!("A registration is already in progress"),
        SubmitOutcome::DuplicateEmail { message } | SubmitOutcome::Failed { message } => {
            bail!(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::FormState;

    #[test]
    fn test_parse_genre() {
        assert_eq!(parse_genre("historia"), Ok(FavoriteGenre::History));
        assert!(parse_genre("romance").is_err());
    }

    #[test]
    fn test_repeated_genre_selects_it_once() {
        let args = RegisterArgs {
            name: "Ana Lopez".to_string(),
            email: "ana@duoc.cl".to_string(),
            password: "Abcdef1234!".to_string(),
            password_confirm: None,
            phone: String::new(),
            genres: vec![FavoriteGenre::Action, FavoriteGenre::Horror, FavoriteGenre::Action],
            photo: None,
            accept_terms: true,
        };

        let form = args
            .events()
            .into_iter()
            .fold(FormState::default(), FormState::apply);

        assert_eq!(
            form.favorite_genres,
            [FavoriteGenre::Action, FavoriteGenre::Horror].into_iter().collect()
        );
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_confirmation_defaults_to_password() {
        let args = RegisterArgs {
            name: "Ana".to_string(),
            email: "ana@duoc.cl".to_string(),
            password: "Abcdef1234!".to_string(),
            password_confirm: None,
            phone: String::new(),
            genres: vec![FavoriteGenre::Action],
            photo: None,
            accept_terms: true,
        };

        let events = args.events();

        assert!(events.contains(&FormEvent::PasswordConfirmChanged("Abcdef1234!".to_string())));
        assert_eq!(events.last(), Some(&FormEvent::GenreToggled(FavoriteGenre::Action)));
    }
}
