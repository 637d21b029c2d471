//! # Seed Data Generator
//!
//! Populates the database with menu groups and products for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./kitchenpos_dev.db
//! cargo run -p kitchenpos-db --bin seed
//!
//! # Specify database path
//! cargo run -p kitchenpos-db --bin seed -- --db ./data/kitchenpos.db
//! ```
//!
//! Menus are not seeded here: they must pass the menu service's price and
//! name checks, so create them through `MenuService::create`.

use std::env;

use kitchenpos_core::{MenuGroup, Money, Product};
use kitchenpos_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Menu groups offered by a typical restaurant.
const MENU_GROUPS: &[&str] = &["Single item", "Two-item set", "Three-item set", "Family set"];

/// Products with prices in the smallest currency unit.
const PRODUCTS: &[(&str, i64)] = &[
    ("Fried chicken", 15_000),
    ("Seasoned chicken", 16_000),
    ("Soy garlic chicken", 17_000),
    ("Cream pasta", 20_000),
    ("Tomato pasta", 18_000),
    ("Caesar salad", 9_000),
    ("French fries", 4_000),
    ("Cola", 2_000),
    ("Lemonade", 3_000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kitchenpos=debug,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./kitchenpos_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("KitchenPOS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./kitchenpos_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    info!(db = %db_path, "Seeding database");
    let db = Database::new(DbConfig::for_path(&db_path)).await?;

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products, skipping seed.", existing);
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    for name in MENU_GROUPS {
        let group = db.menu_groups().save(&MenuGroup::new(*name)).await?;
        println!("  menu group  {}  {}", group.id, group.name);
    }

    for (name, price) in PRODUCTS {
        let product = db
            .products()
            .save(&Product::new(*name, Money::new(*price)))
            .await?;
        println!("  product     {}  {} ({})", product.id, product.name, product.price);
    }

    info!(
        menu_groups = MENU_GROUPS.len(),
        products = PRODUCTS.len(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}
