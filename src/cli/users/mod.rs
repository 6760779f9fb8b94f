//! Users command - lists stored accounts

use clap::Args;

use crate::cli::GlobalArgs;
use crate::domain::user::UserProfile;

#[derive(Args, Clone, Debug, Default)]
pub struct UsersArgs {
    /// Print profiles as JSON
    #[arg(long)]
    pub json: bool,

    /// Show only the account with this email
    #[arg(long)]
    pub email: Option<String>,
}

/// Run the users command
pub async fn run(global: &GlobalArgs, args: UsersArgs) -> anyhow::Result<()> {
    let context = crate::cli::bootstrap(global).await?;

    if let Some(email) = &args.email {
        let profile = context.users.profile(email).await?;
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let profiles: Vec<UserProfile> = context
        .users
        .list()
        .await?
        .iter()
        .map(UserProfile::from)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("No registered accounts");
        return Ok(());
    }

    for profile in &profiles {
        println!(
            "#{:<5} {:<30} {:<40} {}  {}",
            profile.id,
            profile.name,
            profile.email,
            profile.registered_on,
            profile.favorite_genres.join(", ")
        );
    }

    Ok(())
}
