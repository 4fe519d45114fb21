//! Product, variant and image command handlers.

use std::path::PathBuf;

use clap::Subcommand;
use shopsync_admin::AdminClient;

use crate::payload::{print_json, read_payload};

#[derive(Debug, Subcommand)]
pub enum ProductCommands {
    /// Fetch a single product
    Get { id: i64 },
    /// Count products in the shop
    Count,
    /// List all products (cached), or the products of one collection
    List {
        /// Restrict the listing to a collection
        #[arg(long)]
        collection: Option<i64>,
    },
    /// Create a product from a JSON payload
    Create {
        /// Payload file, or `-` for stdin
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a product from a JSON payload
    Update {
        id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// List a product's images
    Images { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum VariantCommands {
    /// Add a variant to a product
    Create {
        product_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Update the variant named by `variant.id` in the payload
    Update {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum ImageCommands {
    /// Add an image to a product
    Create {
        product_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Modify an existing product image
    Update {
        product_id: i64,
        image_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
}

pub(crate) async fn run_product(client: &AdminClient, command: ProductCommands) -> anyhow::Result<()> {
    match command {
        ProductCommands::Get { id } => print_json(&client.get_product(id).await?),
        ProductCommands::Count => print_json(&client.get_product_count().await?),
        ProductCommands::List { collection: None } => print_json(&client.get_all_products().await?),
        ProductCommands::List {
            collection: Some(collection_id),
        } => print_json(&client.get_products_by_collection(collection_id).await?),
        ProductCommands::Create { file } => {
            let payload = read_payload(&file)?;
            print_json(&client.create_product(&payload).await?)
        }
        ProductCommands::Update { id, file } => {
            let payload = read_payload(&file)?;
            print_json(&client.update_product(id, &payload).await?)
        }
        ProductCommands::Images { id } => print_json(&client.get_images(id).await?),
    }
}

pub(crate) async fn run_variant(client: &AdminClient, command: VariantCommands) -> anyhow::Result<()> {
    match command {
        VariantCommands::Create { product_id, file } => {
            let payload = read_payload(&file)?;
            print_json(&client.create_variant(product_id, &payload).await?)
        }
        VariantCommands::Update { file } => {
            let payload = read_payload(&file)?;
            print_json(&client.update_variant(&payload).await?)
        }
    }
}

pub(crate) async fn run_image(client: &AdminClient, command: ImageCommands) -> anyhow::Result<()> {
    match command {
        ImageCommands::Create { product_id, file } => {
            let payload = read_payload(&file)?;
            print_json(&client.create_product_image(product_id, &payload).await?)
        }
        ImageCommands::Update {
            product_id,
            image_id,
            file,
        } => {
            let payload = read_payload(&file)?;
            print_json(
                &client
                    .update_product_image(product_id, image_id, &payload)
                    .await?,
            )
        }
    }
}
