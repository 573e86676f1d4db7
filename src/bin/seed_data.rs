//! Seed data script - populates the database with demo warehouses and inventory
//!
//! Run with: cargo run --bin seed-data

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use warehouse_api::{
    db::{establish_connection, run_migrations},
    services::{
        inventories::{CreateInventoryInput, InventoryService},
        warehouses::{CreateWarehouseInput, WarehouseService},
    },
};

struct DemoWarehouse {
    name: &'static str,
    address: &'static str,
    city: &'static str,
    contact_name: &'static str,
    contact_phone: &'static str,
    contact_email: &'static str,
}

const WAREHOUSES: &[DemoWarehouse] = &[
    DemoWarehouse {
        name: "Manhattan",
        address: "503 Broadway",
        city: "New York",
        contact_name: "Parmin Aujla",
        contact_phone: "+1 (646) 123-1234",
        contact_email: "paujla@instock.com",
    },
    DemoWarehouse {
        name: "Washington",
        address: "33 Pearl Street SW",
        city: "Washington",
        contact_name: "Greame Lyon",
        contact_phone: "+1 (646) 123-1234",
        contact_email: "glyon@instock.com",
    },
    DemoWarehouse {
        name: "Jersey",
        address: "300 Main Street",
        city: "New Jersey",
        contact_name: "Brad MacDonald",
        contact_phone: "+1 (646) 123-1234",
        contact_email: "bmcdonald@instock.com",
    },
];

/// (item_name, description, category, status, quantity)
const ITEMS: &[(&str, &str, &str, &str, i32)] = &[
    (
        "Television",
        "This 50\", 4K LED TV provides a crystal-clear picture and vivid colors.",
        "Electronics",
        "In Stock",
        500,
    ),
    (
        "Gym Bag",
        "Made out of military-grade synthetic materials, this gym bag is highly durable.",
        "Gear",
        "Out of Stock",
        0,
    ),
    (
        "Hoodie",
        "A simple 100% cotton hoodie, this is an essential piece for any wardrobe.",
        "Apparel",
        "In Stock",
        260,
    ),
    (
        "Keychain",
        "Made from 100% genuine leather, this keychain will keep your keys organized.",
        "Accessories",
        "In Stock",
        2000,
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Warehouse API Seed Data ===");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://warehouse.db?mode=rwc".to_string());

    info!("Connecting to database: {}", database_url);
    let db = establish_connection(&database_url).await?;
    run_migrations(&db).await?;

    let db = Arc::new(db);
    let warehouses = WarehouseService::new(db.clone());
    let inventories = InventoryService::new(db);

    let mut item_count = 0;
    for demo in WAREHOUSES {
        let warehouse = warehouses
            .create_warehouse(CreateWarehouseInput {
                warehouse_name: Some(demo.name.into()),
                address: Some(demo.address.into()),
                city: Some(demo.city.into()),
                country: Some("USA".into()),
                contact_name: Some(demo.contact_name.into()),
                contact_position: Some("Warehouse Manager".into()),
                contact_phone: Some(demo.contact_phone.into()),
                contact_email: Some(demo.contact_email.into()),
            })
            .await?;
        info!("  Created warehouse {} ({})", warehouse.warehouse_name, warehouse.id);

        for (item_name, description, category, status, quantity) in ITEMS {
            inventories
                .create_inventory(CreateInventoryInput {
                    warehouse_id: Some(json!(warehouse.id)),
                    item_name: Some((*item_name).into()),
                    description: Some((*description).into()),
                    category: Some((*category).into()),
                    status: Some((*status).into()),
                    quantity: Some(json!(quantity)),
                })
                .await?;
            item_count += 1;
        }
    }

    info!(
        "Created {} warehouses and {} inventory items",
        WAREHOUSES.len(),
        item_count
    );
    info!("Try: curl http://localhost:8080/api/inventories");
    info!("Or explore interactively at: http://localhost:8080/swagger-ui");

    Ok(())
}
