//! # almacen-app: Orchestration Layer for Almacén
//!
//! Wires the pure core, the database layer and the report writers into
//! the operations a presentation layer calls:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      almacen-app                                │
//! │                                                                 │
//! │  auth        register_user / login → AuthContext                │
//! │  inventory   register_product / record_inbound / record_outbound│
//! │              / low_stock_alerts                                 │
//! │  reports     export_inventory_xlsx / export_inventory_pdf       │
//! │              / generate_invoice                                 │
//! │  config      env-driven AppConfig                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Authentication is request-scoped: `login` returns an [`AuthContext`]
//! that callers pass explicitly into gated operations. There is no
//! ambient logged-in-user state anywhere in the workspace.
//!
//! Every operation is one-shot: no retries, and no error is swallowed -
//! failures propagate to the caller for user-visible reporting.

pub mod auth;
pub mod config;
pub mod error;
pub mod inventory;
pub mod reports;

pub use auth::{AuthContext, AuthService};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use inventory::InventoryService;
pub use reports::ReportService;

/// Initializes the tracing subscriber for binaries.
///
/// Filter via `RUST_LOG` (e.g. `RUST_LOG=almacen_db=debug`); defaults to
/// `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();
}
