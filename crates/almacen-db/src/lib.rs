//! # almacen-db: Database Layer for Almacén
//!
//! All SQLite access for the inventory manager lives here.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        almacen-db                               │
//! │                                                                 │
//! │  ┌───────────────┐   ┌────────────────┐   ┌─────────────────┐   │
//! │  │     pool      │   │   repository   │   │   migrations    │   │
//! │  │  SqlitePool   │◄──│  ProductRepo   │   │  001_init.sql   │   │
//! │  │  WAL mode     │   │  UserRepo      │   │  (embedded)     │   │
//! │  └───────────────┘   └────────────────┘   └─────────────────┘   │
//! │          │                                                      │
//! │          ▼                                                      │
//! │     inventario.db (single local SQLite file)                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use almacen_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("inventario.db")).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
