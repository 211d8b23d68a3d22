//! # Report Builder: Client Invoice
//!
//! Pure invoice computation: line subtotals and the grand total for a
//! client-facing document.
//!
//! ## Invoice Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Generate Invoice                                               │
//! │                                                                 │
//! │  Caller pre-filters checked items with a valid positive qty     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  build_invoice("Alice", [(Widget @ $2.50, 4)]) ← THIS MODULE    │
//! │       │                                                         │
//! │       │  subtotal = qty × unit_price                            │
//! │       │  total    = Σ subtotals                                 │
//! │       ▼                                                         │
//! │  Invoice → rendered into a PDF by almacen-report                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// Title line of the invoice PDF.
pub const INVOICE_TITLE: &str = "Factura de Venta";

// =============================================================================
// Invoice Types
// =============================================================================

/// One line of a client invoice. Ephemeral, derived per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// Always `quantity × unit_price`.
    pub subtotal: Money,
}

impl InvoiceLine {
    /// Renders the line in the document form:
    /// `{name} - {qty} x ${price} = ${subtotal}`
    pub fn render(&self) -> String {
        format!(
            "{} - {} x {} = {}",
            self.product_name, self.quantity, self.unit_price, self.subtotal
        )
    }
}

/// A client-facing invoice. Ephemeral, derived per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub client_name: String,
    /// Ordered as the caller supplied the selection.
    pub lines: Vec<InvoiceLine>,
    /// Always the sum of line subtotals.
    pub total: Money,
}

impl Invoice {
    /// Renders the `Cliente:` header line.
    pub fn client_line(&self) -> String {
        format!("Cliente: {}", self.client_name)
    }

    /// Renders the `Total:` footer line.
    pub fn total_line(&self) -> String {
        format!("Total: {}", self.total)
    }
}

// =============================================================================
// Invoice Construction
// =============================================================================

/// Builds an invoice from the selected (product, requested_quantity) pairs.
///
/// The caller pre-filters the selection to checked items with a valid
/// positive integer quantity; anything else was silently excluded upstream
/// and entries with a non-positive quantity are skipped here as well, not
/// treated as an error. An empty selection is legal and yields an invoice
/// with no lines and a zero total.
pub fn build_invoice(client_name: &str, selected_items: &[(Product, i64)]) -> Invoice {
    let lines: Vec<InvoiceLine> = selected_items
        .iter()
        .filter(|(_, qty)| *qty > 0)
        .map(|(product, qty)| {
            let unit_price = product.price();
            InvoiceLine {
                product_name: product.name.clone(),
                quantity: *qty,
                unit_price,
                subtotal: unit_price.multiply_quantity(*qty),
            }
        })
        .collect();

    let total: Money = lines.iter().map(|l| l.subtotal).sum();

    Invoice {
        client_name: client_name.to_string(),
        lines,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
