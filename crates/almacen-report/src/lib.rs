//! # almacen-report: File Artifacts for Almacén
//!
//! Renders the pure report structures from almacen-core into the two
//! downloadable artifact shapes:
//!
//! - a tabular xlsx export of the inventory
//!   (columns: id, nombre, cantidad, precio, imagen)
//! - line-oriented PDF documents: the inventory report and the client
//!   invoice
//!
//! ```text
//! almacen-core              THIS CRATE                 disk
//! ─────────────             ──────────────             ─────────────
//! InventoryRow[]  ───────►  excel::write_* ──────────► reporte_*.xlsx
//! report lines    ───────►  pdf::write_inventory_* ──► reporte_*.pdf
//! Invoice         ───────►  pdf::write_invoice_* ────► factura_*.pdf
//! ```
//!
//! Every writer takes an explicit output path; [`output::unique_output_path`]
//! builds one per request so concurrent generations never collide.

pub mod error;
pub mod excel;
pub mod output;
pub mod pdf;

pub use error::{ReportError, ReportResult};
pub use excel::write_inventory_xlsx;
pub use output::{unique_output_path, INVENTORY_REPORT_STEM, INVOICE_STEM};
pub use pdf::{write_inventory_pdf, write_invoice_pdf};
