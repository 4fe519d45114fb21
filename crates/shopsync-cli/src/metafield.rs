//! Metafield command handlers.

use std::path::PathBuf;

use clap::Subcommand;
use shopsync_admin::AdminClient;

use crate::payload::{print_json, read_payload};

#[derive(Debug, Subcommand)]
pub enum MetafieldCommands {
    /// List every metafield of a product
    List { product_id: i64 },
    /// Create a product metafield; prints the new id
    Create {
        product_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a metafield; prints whether the API answered with content
    Update {
        metafield_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
}

pub(crate) async fn run_metafield(
    client: &AdminClient,
    command: MetafieldCommands,
) -> anyhow::Result<()> {
    match command {
        MetafieldCommands::List { product_id } => {
            print_json(&client.get_product_metafields(product_id).await?)
        }
        MetafieldCommands::Create { product_id, file } => {
            let payload = read_payload(&file)?;
            print_json(&client.create_product_metafield(product_id, &payload).await?)
        }
        MetafieldCommands::Update { metafield_id, file } => {
            let payload = read_payload(&file)?;
            print_json(&client.update_product_metafield(metafield_id, &payload).await?)
        }
    }
}
