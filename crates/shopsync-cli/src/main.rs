mod catalog;
mod inventory;
mod metafield;
mod payload;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::{ImageCommands, ProductCommands, VariantCommands};
use crate::inventory::InventoryCommands;
use crate::metafield::MetafieldCommands;

#[derive(Debug, Parser)]
#[command(name = "shopsync")]
#[command(about = "Shopify Admin REST client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Products, counts and listings
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Product variants
    Variant {
        #[command(subcommand)]
        command: VariantCommands,
    },
    /// Product images
    Image {
        #[command(subcommand)]
        command: ImageCommands,
    },
    /// Product metafields
    Metafield {
        #[command(subcommand)]
        command: MetafieldCommands,
    },
    /// Inventory levels at the configured location
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
    /// Print the inventory location this process uses
    Location,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = shopsync_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let client = shopsync_admin::AdminClient::connect(&config).await?;

    match cli.command {
        Commands::Product { command } => catalog::run_product(&client, command).await,
        Commands::Variant { command } => catalog::run_variant(&client, command).await,
        Commands::Image { command } => catalog::run_image(&client, command).await,
        Commands::Metafield { command } => metafield::run_metafield(&client, command).await,
        Commands::Inventory { command } => inventory::run_inventory(&client, command).await,
        Commands::Location => payload::print_json(&client.location_id()),
    }
}

#[cfg(test)]
mod tests;
