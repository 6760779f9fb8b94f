//! Catalog command - loads the first catalog page

use anyhow::bail;
use clap::Args;

use crate::cli::GlobalArgs;
use crate::infrastructure::catalog::CatalogController;

#[derive(Args, Clone, Debug, Default)]
pub struct CatalogArgs {
    /// Page size (overrides config)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Include artwork URLs
    #[arg(long)]
    pub images: bool,
}

/// Run the catalog command
pub async fn run(global: &GlobalArgs, args: CatalogArgs) -> anyhow::Result<()> {
    let context = crate::cli::bootstrap(global).await?;
    let page_size = args.limit.unwrap_or(context.config.catalog.page_size);

    let mut controller = CatalogController::with_page_size(context.catalog.clone(), page_size);
    controller.load().await;

    if let Some(error) = controller.error() {
        bail!(error.to_string());
    }

    for item in controller.items() {
        if args.images {
            println!("{:>5}  {:<20} {}", item.id(), item.name, item.image_url());
        } else {
            println!("{:>5}  {}", item.id(), item.name);
        }
    }

    Ok(())
}
