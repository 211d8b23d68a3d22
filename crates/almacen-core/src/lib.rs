//! # almacen-core: Pure Business Logic for Almacén
//!
//! This crate is the heart of the inventory manager. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Almacén Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 almacen-app (orchestration)               │  │
//! │  │   register / login / movements / alerts / reports         │  │
//! │  └──────────────────────────┬────────────────────────────────┘  │
//! │                             │                                   │
//! │  ┌──────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ almacen-core (THIS CRATE) ★                │  │
//! │  │                                                           │  │
//! │  │  ┌────────┐ ┌───────┐ ┌────────┐ ┌────────┐ ┌─────────┐  │  │
//! │  │  │ types  │ │ money │ │ ledger │ │ report │ │ invoice │  │  │
//! │  │  └────────┘ └───────┘ └────────┘ └────────┘ └─────────┘  │  │
//! │  │                                                           │  │
//! │  │  NO I/O • NO DATABASE • NO FILES • PURE FUNCTIONS         │  │
//! │  └──────────────────────────┬────────────────────────────────┘  │
//! │                             │                                   │
//! │  ┌──────────────────────────▼────────────────────────────────┐  │
//! │  │    almacen-db (SQLite)        almacen-report (xlsx/PDF)   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, StockMovement)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - Stock movement math and low-stock classification
//! - [`report`] - Inventory export rows and report lines
//! - [`invoice`] - Invoice line/total computation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceLine};
pub use ledger::MovementKind;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default low-stock threshold: a product with quantity at or below this
/// value shows up in the alerts listing.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Maximum quantity accepted for a single stock movement.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 100000 instead of 100)
/// for a single-store operation.
pub const MAX_MOVEMENT_QUANTITY: i64 = 1_000_000;
