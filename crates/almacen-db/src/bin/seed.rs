//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p almacen-db --bin seed
//! cargo run -p almacen-db --bin seed -- --db ./inventario.db
//! ```

use std::env;

use almacen_core::NewProduct;
use almacen_db::{Database, DbConfig};

/// Sample catalog: (name, quantity, price in cents).
/// A few entries sit at or below the default low-stock threshold so the
/// alerts listing has something to show.
const CATALOG: &[(&str, i64, i64)] = &[
    ("Cafe molido 500g", 24, 899),
    ("Azucar 1kg", 40, 250),
    ("Arroz 1kg", 35, 320),
    ("Aceite de girasol 1L", 18, 1150),
    ("Harina de trigo 1kg", 3, 180),
    ("Leche entera 1L", 50, 145),
    ("Galletas surtidas", 12, 399),
    ("Jabon de tocador", 5, 220),
    ("Detergente 800g", 9, 780),
    ("Papel higienico x4", 2, 650),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./inventario.db");

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
                println!("Almacen Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./inventario.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Almacen Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("Connected, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let repo = db.products();
    let mut inserted = 0;
    for (name, quantity, price_cents) in CATALOG {
        let product = NewProduct {
            name: name.to_string(),
            quantity: *quantity,
            price_cents: *price_cents,
            image_path: None,
        };
        if let Err(e) = repo.insert(&product).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }
        inserted += 1;
    }

    println!("Inserted {} products", inserted);

    let low = repo.list_low_stock(5).await?;
    println!("Low-stock (<= 5): {} products", low.len());
    for p in low {
        println!("  {} (quantity {})", p.name, p.quantity);
    }

    println!();
    println!("Seed complete");

    Ok(())
}
