//! # Stock Ledger
//!
//! Pure stock-movement math: the new quantity after an inbound or outbound
//! movement, and low-stock classification.
//!
//! ## Movement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Record Movement                                                │
//! │                                                                 │
//! │  User enters: product 1, outbound, qty 3                        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  apply_movement(&product, Outbound, 3) ← THIS MODULE            │
//! │       │                                                         │
//! │       ├── qty <= 0?            → ValidationError                │
//! │       ├── exceeds stock?       → CoreError::InsufficientStock   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  new quantity → persisted as an atomic delta by almacen-db      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Composition is additive: inbound q1 then outbound q2 from Q always
//! lands on Q + q1 - q2 (when both movements are legal).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::DEFAULT_LOW_STOCK_THRESHOLD;

// =============================================================================
// Movement Kind
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Stock received into the store.
    Inbound,
    /// Stock leaving the store.
    Outbound,
}

impl MovementKind {
    /// Applies the direction's sign to a positive quantity.
    #[inline]
    pub fn signed(&self, quantity: i64) -> i64 {
        match self {
            MovementKind::Inbound => quantity,
            MovementKind::Outbound => -quantity,
        }
    }
}

// =============================================================================
// Movement Application
// =============================================================================

/// Computes the quantity a product would hold after a movement.
///
/// ## Arguments
/// * `product` - Current state of the product
/// * `kind` - Movement direction
/// * `quantity` - Movement size; must be a positive integer
///
/// ## Returns
/// * `Ok(new_quantity)` - The quantity after the movement
/// * `Err(CoreError::Validation)` - Non-positive or oversized quantity
/// * `Err(CoreError::InsufficientStock)` - Outbound exceeds available stock
///
/// ## Example
/// ```rust
/// # use almacen_core::{ledger, MovementKind, Product};
/// # use chrono::Utc;
/// # let product = Product {
/// #     id: 1, name: "Widget".into(), quantity: 10, price_cents: 250,
/// #     image_path: None, created_at: Utc::now(), updated_at: Utc::now(),
/// # };
/// let after = ledger::apply_movement(&product, MovementKind::Inbound, 5).unwrap();
/// assert_eq!(after, 15);
/// ```
pub fn apply_movement(product: &Product, kind: MovementKind, quantity: i64) -> CoreResult<i64> {
    validate_quantity(quantity)?;

    match kind {
        MovementKind::Inbound => Ok(product.quantity + quantity),
        MovementKind::Outbound => {
            if quantity > product.quantity {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.quantity,
                    requested: quantity,
                });
            }
            Ok(product.quantity - quantity)
        }
    }
}

// =============================================================================
// Low-Stock Classification
// =============================================================================

/// Returns the products at or below the threshold, ordered by ascending id.
///
/// Read-only: the input order does not matter, the result order is stable.
/// Pass [`DEFAULT_LOW_STOCK_THRESHOLD`] for the standard alert listing.
pub fn filter_low_stock(products: Vec<Product>, threshold: i64) -> Vec<Product> {
    let mut low: Vec<Product> = products
        .into_iter()
        .filter(|p| p.is_low_stock(threshold))
        .collect();
    low.sort_by_key(|p| p.id);
    low
}

/// [`filter_low_stock`] with the default threshold of 5.
pub fn filter_low_stock_default(products: Vec<Product>) -> Vec<Product> {
    filter_low_stock(products, DEFAULT_LOW_STOCK_THRESHOLD)
}

// =============================================================================
// Unit Tests
// =============================================================================
