//! # Domain Types
//!
//! Core domain types for the inventory manager.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌────────────────┐  ┌────────────────┐  ┌──────────────────┐   │
//! │  │    Product     │  │      User      │  │  StockMovement   │   │
//! │  │  ────────────  │  │  ────────────  │  │  (ephemeral)     │   │
//! │  │  id (i64)      │  │  id (i64)      │  │  product_id      │   │
//! │  │  name          │  │  name          │  │  kind            │   │
//! │  │  quantity      │  │  email (uniq)  │  │  quantity        │   │
//! │  │  price_cents   │  │  password_hash │  └──────────────────┘   │
//! │  │  image_path    │  └────────────────┘                         │
//! │  └────────────────┘                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are persisted; stock movements are never stored as their own
//! entity, only as signed deltas applied to `Product.quantity`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::MovementKind;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A stock-tracked item.
///
/// `id` is assigned by the database (AUTOINCREMENT), immutable and unique.
/// Products are created on registration and never deleted; only `quantity`
/// is mutated, by ledger operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (database AUTOINCREMENT).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Quantity on hand. Never negative: outbound movements that would
    /// break this are rejected.
    pub quantity: i64,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Relative path to the product image, if one was uploaded.
    pub image_path: Option<String>,

    /// When the product was registered.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product sits at or below the low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

/// Input for registering a new product (id and timestamps are assigned by
/// the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub image_path: Option<String>,
}

// =============================================================================
// Stock Movement
// =============================================================================

/// An inbound or outbound stock adjustment.
///
/// Ephemeral: represented only as a signed delta applied to
/// `Product.quantity`, never persisted as its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub product_id: i64,
    pub kind: MovementKind,
    /// Always positive; the sign comes from `kind`.
    pub quantity: i64,
}

impl StockMovement {
    /// The signed delta this movement applies to the stored quantity.
    #[inline]
    pub fn delta(&self) -> i64 {
        self.kind.signed(self.quantity)
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered user of the store.
///
/// Created on registration, read on login, never updated or deleted.
/// Plaintext passwords are never stored; only an argon2 hash is
/// kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique identifier (database AUTOINCREMENT).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Login email, unique per user.
    pub email: String,

    /// Argon2 PHC-format password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new user. `password_hash` is already hashed;
/// raw passwords never reach the db layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: i64) -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            quantity,
            price_cents: 250,
            image_path: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_price_as_money() {
        assert_eq!(widget(10).price(), Money::from_cents(250));
    }

    #[test]
    fn test_is_low_stock() {
        assert!(widget(5).is_low_stock(5));
        assert!(widget(0).is_low_stock(5));
        assert!(!widget(6).is_low_stock(5));
    }

    #[test]
    fn test_user_serialization_omits_password_hash() {
        let user = User {
            id: 1,
            name: "Paula".to_string(),
            email: "paula@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("paula@example.com"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_movement_delta() {
        let inbound = StockMovement {
            product_id: 1,
            kind: MovementKind::Inbound,
            quantity: 5,
        };
        let outbound = StockMovement {
            product_id: 1,
            kind: MovementKind::Outbound,
            quantity: 3,
        };
        assert_eq!(inbound.delta(), 5);
        assert_eq!(outbound.delta(), -3);
    }
}
