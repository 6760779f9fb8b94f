//! Login command - checks credentials and prints the profile

use anyhow::bail;
use clap::Args;

use crate::cli::GlobalArgs;
use crate::domain::login::{LoginEvent, LoginOutcome};
use crate::domain::user::UserProfile;
use crate::infrastructure::login::LoginController;

#[derive(Args, Clone, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

/// Run the login command
pub async fn run(global: &GlobalArgs, args: LoginArgs) -> anyhow::Result<()> {
    let context = crate::cli::bootstrap(global).await?;
    let mut controller = LoginController::new(context.users.clone());

    controller.apply(LoginEvent::EmailChanged(args.email));
    controller.apply(LoginEvent::PasswordChanged(args.password));

    match controller.attempt_login().await {
        LoginOutcome::Authenticated(user) => {
            println!("{}", serde_json::to_string_pretty(&UserProfile::from(&user))?);
            Ok(())
        }
        LoginOutcome::Rejected { message } => bail!(message),
    }
}
