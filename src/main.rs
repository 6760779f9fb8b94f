use clap::Parser;
use embrollo::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Command::Register(args) => cli::register::run(&global, args).await,
        Command::Login(args) => cli::login::run(&global, args).await,
        Command::Users(args) => cli::users::run(&global, args).await,
        Command::Catalog(args) => cli::catalog::run(&global, args).await,
        Command::Remote(command) => cli::remote::run(&global, command).await,
        Command::SpecialMode(command) => cli::special_mode::run(&global, command).await,
        Command::Migrate => cli::migrate::run(&global).await,
    }
}
