//! # Repository Module
//!
//! Database repository implementations.
//!
//! The Repository pattern keeps every SQL statement in one place behind a
//! clean API:
//!
//! ```text
//! almacen-app operation
//!      │   db.products().adjust_quantity(1, -3)
//!      ▼
//! ProductRepository ──► guarded UPDATE ──► SQLite
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and stock adjustment
//! - [`user::UserRepository`] - User registration and lookup

pub mod product;
pub mod user;
