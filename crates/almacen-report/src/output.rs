//! # Output Path Naming
//!
//! Writing every report to a fixed path (`reportes/reporte_inventario.pdf`)
//! would let concurrent requests overwrite each other - last writer wins.
//! Artifacts are instead uniquely named per request:
//! `{stem}_{timestamp}_{short-uuid}.{ext}` under a caller-supplied
//! directory.

use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-name stem for inventory exports (xlsx and PDF).
pub const INVENTORY_REPORT_STEM: &str = "reporte_inventario";

/// File-name stem for client invoices.
pub const INVOICE_STEM: &str = "factura_cliente";

/// Builds a unique output path for one report request.
///
/// ## Example
/// ```rust
/// use almacen_report::{unique_output_path, INVENTORY_REPORT_STEM};
/// use std::path::Path;
///
/// let path = unique_output_path(Path::new("reportes"), INVENTORY_REPORT_STEM, "xlsx");
/// let name = path.file_name().unwrap().to_str().unwrap();
/// assert!(name.starts_with("reporte_inventario_"));
/// assert!(name.ends_with(".xlsx"));
/// ```
pub fn unique_output_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    // 8 hex chars of a v4 uuid is plenty to disambiguate requests landing
    // in the same second
    let suffix = Uuid::new_v4().simple().to_string();
    dir.join(format!("{stem}_{timestamp}_{}.{ext}", &suffix[..8]))
}
