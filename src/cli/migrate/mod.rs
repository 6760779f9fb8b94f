//! Migrate command - brings the store schema up to date

use tracing::info;

use crate::cli::GlobalArgs;
use crate::infrastructure::storage::{self, SqliteMigrator};

/// Run the migrate command
pub async fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = crate::cli::load_config(global)?;

    let pool = storage::connect(&config.database.url, config.database.max_connections).await?;
    let version = SqliteMigrator::new(pool.clone()).current_version().await?;
    pool.close().await;

    info!(?version, "Migrations applied");
    println!("Schema version: {}", version.unwrap_or(0));

    Ok(())
}
