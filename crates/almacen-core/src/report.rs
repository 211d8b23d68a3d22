//! # Report Builder: Inventory Exports
//!
//! Pure transforms of the product list into the two downloadable artifact
//! shapes: a tabular export (spreadsheet rows) and a line-oriented text
//! report (rendered into a PDF by almacen-report).
//!
//! Both transforms preserve the input order, which is the store's natural
//! row order (ascending id).

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// Title line of the inventory PDF report.
pub const INVENTORY_REPORT_TITLE: &str = "Reporte de Inventario";

/// Column headers of the tabular export, in export order.
pub const INVENTORY_COLUMNS: [&str; 5] = ["id", "nombre", "cantidad", "precio", "imagen"];

// =============================================================================
// Tabular Export
// =============================================================================

/// One spreadsheet row of the inventory export.
///
/// Field order mirrors [`INVENTORY_COLUMNS`]: (id, nombre, cantidad,
/// precio, imagen). No aggregation is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: i64,
    pub nombre: String,
    pub cantidad: i64,
    pub precio: Money,
    pub imagen: Option<String>,
}

impl From<&Product> for InventoryRow {
    fn from(p: &Product) -> Self {
        InventoryRow {
            id: p.id,
            nombre: p.name.clone(),
            cantidad: p.quantity,
            precio: p.price(),
            imagen: p.image_path.clone(),
        }
    }
}

/// Transforms the full product list into spreadsheet export rows.
pub fn inventory_rows(products: &[Product]) -> Vec<InventoryRow> {
    products.iter().map(InventoryRow::from).collect()
}

// =============================================================================
// Line-Oriented Report
// =============================================================================

/// Produces one formatted text line per product:
///
/// `ID: {id} - Nombre: {name} - Cantidad: {quantity} - Precio: ${price}`
pub fn inventory_report_lines(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| {
            format!(
                "ID: {} - Nombre: {} - Cantidad: {} - Precio: {}",
                p.id,
                p.name,
                p.quantity,
                p.price()
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: i64, name: &str, quantity: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity,
            price_cents,
            image_path: Some(format!("static/images/productos/{name}.png")),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_inventory_rows_column_order_and_values() {
        let products = vec![product(1, "Widget", 10, 250), product(2, "Gadget", 3, 1099)];
        let rows = inventory_rows(&products);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].nombre, "Widget");
        assert_eq!(rows[0].cantidad, 10);
        assert_eq!(rows[0].precio, Money::from_cents(250));
        assert_eq!(
            rows[0].imagen.as_deref(),
            Some("static/images/productos/Widget.png")
        );
        assert_eq!(rows[1].nombre, "Gadget");
    }

    #[test]
    fn test_report_lines_format() {
        let products = vec![product(1, "Widget", 10, 250)];
        let lines = inventory_report_lines(&products);
        assert_eq!(
            lines,
            vec!["ID: 1 - Nombre: Widget - Cantidad: 10 - Precio: $2.50"]
        );
    }

    #[test]
    fn test_report_lines_preserve_input_order() {
        let products = vec![product(3, "C", 1, 100), product(1, "A", 2, 200)];
        let lines = inventory_report_lines(&products);
        assert!(lines[0].starts_with("ID: 3"));
        assert!(lines[1].starts_with("ID: 1"));
    }

    #[test]
    fn test_empty_inventory() {
        assert!(inventory_rows(&[]).is_empty());
        assert!(inventory_report_lines(&[]).is_empty());
    }
}
