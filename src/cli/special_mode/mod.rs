//! Special mode command - shows or flips the persisted flag

use clap::Subcommand;

use crate::cli::GlobalArgs;
use crate::infrastructure::preferences::SpecialModeController;

#[derive(Subcommand, Clone, Debug)]
pub enum SpecialModeCommand {
    /// Print the current state
    Show,

    /// Flip the flag and persist it
    Toggle,
}

/// Run a special-mode subcommand
pub async fn run(global: &GlobalArgs, command: SpecialModeCommand) -> anyhow::Result<()> {
    let context = crate::cli::bootstrap(global).await?;
    let mut controller = SpecialModeController::new(context.preferences.clone());

    let enabled = match command {
        SpecialModeCommand::Show => controller.load().await?,
        SpecialModeCommand::Toggle => {
            controller.load().await?;
            let enabled = controller.toggle().await?;
            if controller.show_message() {
                println!("Special mode updated");
                controller.dismiss_message();
            }
            enabled
        }
    };

    println!("Special mode: {}", if enabled { "on" } else { "off" });

    Ok(())
}
