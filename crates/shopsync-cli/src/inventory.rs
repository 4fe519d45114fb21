//! Inventory command handlers.

use clap::Subcommand;
use shopsync_admin::AdminClient;

use crate::payload::print_json;

#[derive(Debug, Subcommand)]
pub enum InventoryCommands {
    /// Set the available quantity of an inventory item
    Set {
        item_id: i64,
        #[arg(allow_negative_numbers = true)]
        available: i64,
    },
    /// Change the available quantity of an inventory item by a delta
    Adjust {
        item_id: i64,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
}

pub(crate) async fn run_inventory(
    client: &AdminClient,
    command: InventoryCommands,
) -> anyhow::Result<()> {
    let applied = match command {
        InventoryCommands::Set { item_id, available } => {
            client.set_inventory(item_id, available).await?
        }
        InventoryCommands::Adjust { item_id, delta } => {
            client.adjust_inventory(item_id, delta).await?
        }
    };
    if !applied {
        tracing::warn!("inventory endpoint returned an empty response");
    }
    print_json(&applied)
}
