use std::path::{Path, PathBuf};

use super::*;
use crate::payload::read_payload;

#[test]
fn command_is_required() {
    assert!(Cli::try_parse_from(["shopsync"]).is_err());
}

#[test]
fn parses_product_get() {
    let cli = Cli::try_parse_from(["shopsync", "product", "get", "632910392"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Product {
            command: ProductCommands::Get { id: 632_910_392 }
        }
    ));
}

#[test]
fn product_list_defaults_to_all_products() {
    let cli = Cli::try_parse_from(["shopsync", "product", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Product {
            command: ProductCommands::List { collection: None }
        }
    ));
}

#[test]
fn product_list_with_collection() {
    let cli = Cli::try_parse_from(["shopsync", "product", "list", "--collection", "841564295"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Product {
            command: ProductCommands::List {
                collection: Some(841_564_295)
            }
        }
    ));
}

#[test]
fn product_update_requires_file() {
    assert!(Cli::try_parse_from(["shopsync", "product", "update", "1"]).is_err());
    let cli = Cli::try_parse_from(["shopsync", "product", "update", "1", "--file", "p.json"]).unwrap();
    match cli.command {
        Commands::Product {
            command: ProductCommands::Update { id, file },
        } => {
            assert_eq!(id, 1);
            assert_eq!(file, PathBuf::from("p.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_image_update() {
    let cli = Cli::try_parse_from(["shopsync", "image", "update", "7", "11", "--file", "-"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Image {
            command: ImageCommands::Update {
                product_id: 7,
                image_id: 11,
                ..
            }
        }
    ));
}

#[test]
fn parses_variant_update_without_id_argument() {
    let cli = Cli::try_parse_from(["shopsync", "variant", "update", "--file", "v.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Variant {
            command: VariantCommands::Update { .. }
        }
    ));
}

#[test]
fn parses_metafield_create() {
    let cli = Cli::try_parse_from(["shopsync", "metafield", "create", "5", "--file", "m.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Metafield {
            command: MetafieldCommands::Create { product_id: 5, .. }
        }
    ));
}

#[test]
fn inventory_adjust_accepts_negative_delta() {
    let cli = Cli::try_parse_from(["shopsync", "inventory", "adjust", "808950810", "-3"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Inventory {
            command: InventoryCommands::Adjust {
                item_id: 808_950_810,
                delta: -3
            }
        }
    ));
}

#[test]
fn inventory_set_accepts_negative_available() {
    let cli = Cli::try_parse_from(["shopsync", "inventory", "set", "5", "-3"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Inventory {
            command: InventoryCommands::Set {
                item_id: 5,
                available: -3
            }
        }
    ));
}

#[test]
fn inventory_set_has_no_location_argument() {
    assert!(Cli::try_parse_from([
        "shopsync", "inventory", "set", "1", "5", "--location", "9"
    ])
    .is_err());
}

#[test]
fn parses_location() {
    let cli = Cli::try_parse_from(["shopsync", "location"]).unwrap();
    assert!(matches!(cli.command, Commands::Location));
}

#[test]
fn read_payload_parses_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("payload.json");
    std::fs::write(&file, r#"{"product": {"title": "Mug"}}"#).unwrap();
    let payload = read_payload(&file).unwrap();
    assert_eq!(payload["product"]["title"], "Mug");
}

#[test]
fn read_payload_rejects_invalid_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("payload.json");
    std::fs::write(&file, "title: Mug").unwrap();
    assert!(read_payload(&file).is_err());
}

#[test]
fn read_payload_missing_file_is_an_error() {
    assert!(read_payload(Path::new("/definitely/not/here.json")).is_err());
}
