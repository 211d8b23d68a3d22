//! # Inventory xlsx Export
//!
//! Writes the inventory table to an xlsx workbook: one header row with the
//! export columns (id, nombre, cantidad, precio, imagen) and one row per
//! product, no aggregation.

use std::path::Path;
use tracing::debug;
use xlsxwriter::Workbook;

use crate::error::{ReportError, ReportResult};
use almacen_core::report::{InventoryRow, INVENTORY_COLUMNS};

/// Writes the inventory export rows to an xlsx file at `path`.
///
/// Prices are written as numbers in major units (e.g. cents 250 → 2.5) so
/// the column stays usable in spreadsheet formulas.
pub fn write_inventory_xlsx(rows: &[InventoryRow], path: &Path) -> ReportResult<()> {
    debug!(rows = rows.len(), path = %path.display(), "Writing inventory xlsx");

    let path_str = path
        .to_str()
        .ok_or_else(|| ReportError::InvalidPath(path.to_path_buf()))?;

    let workbook = Workbook::new(path_str)?;
    let mut sheet = workbook.add_worksheet(None)?;

    for (col, header) in INVENTORY_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, header, None)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.id as f64, None)?;
        sheet.write_string(r, 1, &row.nombre, None)?;
        sheet.write_number(r, 2, row.cantidad as f64, None)?;
        sheet.write_number(r, 3, row.precio.cents() as f64 / 100.0, None)?;
        match &row.imagen {
            Some(imagen) => sheet.write_string(r, 4, imagen, None)?,
            None => sheet.write_blank(r, 4, None)?,
        }
    }

    workbook.close()?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use almacen_core::money::Money;

    fn row(id: i64, nombre: &str, cantidad: i64, cents: i64) -> InventoryRow {
        InventoryRow {
            id,
            nombre: nombre.to_string(),
            cantidad,
            precio: Money::from_cents(cents),
            imagen: None,
        }
    }

    #[test]
    fn test_writes_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.xlsx");

        let rows = vec![row(1, "Widget", 10, 250), row(2, "Gadget", 3, 1099)];
        write_inventory_xlsx(&rows, &path).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_empty_inventory_still_produces_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacio.xlsx");

        write_inventory_xlsx(&[], &path).unwrap();
        assert!(path.exists());
    }
}
