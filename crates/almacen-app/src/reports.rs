//! # Report Operations
//!
//! Exports the inventory listing to xlsx or PDF and generates client
//! invoices. Each call snapshots the catalog, writes the artifact to a
//! uniquely-named file under the configured output directory and returns
//! the path.

use std::path::{Path, PathBuf};

use tracing::info;

use almacen_core::invoice::{build_invoice, Invoice};
use almacen_core::report::inventory_rows;
use almacen_core::types::Product;
use almacen_core::validation::{validate_client_name, validate_quantity};
use almacen_core::CoreError;
use almacen_db::Database;
use almacen_report::{
    unique_output_path, write_inventory_pdf, write_inventory_xlsx, write_invoice_pdf,
    INVENTORY_REPORT_STEM, INVOICE_STEM,
};

use crate::auth::AuthContext;
use crate::error::AppResult;

/// Report and invoice generation.
pub struct ReportService {
    db: Database,
    output_dir: PathBuf,
}

impl ReportService {
    pub fn new(db: Database, output_dir: impl Into<PathBuf>) -> Self {
        ReportService {
            db,
            output_dir: output_dir.into(),
        }
    }

    /// Directory artifacts are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Exports the full inventory as a spreadsheet and returns the path.
    pub async fn export_inventory_xlsx(&self, ctx: &AuthContext) -> AppResult<PathBuf> {
        let products = self.db.products().list().await?;
        let path = self.prepare_path(INVENTORY_REPORT_STEM, "xlsx")?;

        write_inventory_xlsx(&inventory_rows(&products), &path)?;

        info!(
            user_id = ctx.user_id,
            products = products.len(),
            path = %path.display(),
            "Inventory xlsx exported"
        );
        Ok(path)
    }

    /// Exports the full inventory as a PDF and returns the path.
    pub async fn export_inventory_pdf(&self, ctx: &AuthContext) -> AppResult<PathBuf> {
        let products = self.db.products().list().await?;
        let path = self.prepare_path(INVENTORY_REPORT_STEM, "pdf")?;

        write_inventory_pdf(&products, &path)?;

        info!(
            user_id = ctx.user_id,
            products = products.len(),
            path = %path.display(),
            "Inventory PDF exported"
        );
        Ok(path)
    }

    /// Builds an invoice from `(product_id, quantity)` selections and
    /// writes it as a PDF.
    ///
    /// Selections with a zero or negative quantity are skipped silently,
    /// matching the sale form where untouched rows post as zero. A
    /// selection naming an unknown product is an error, not a skip.
    ///
    /// ## Returns
    /// The computed [`Invoice`] and the path of the written PDF.
    pub async fn generate_invoice(
        &self,
        ctx: &AuthContext,
        client_name: &str,
        selections: &[(i64, i64)],
    ) -> AppResult<(Invoice, PathBuf)> {
        validate_client_name(client_name).map_err(CoreError::from)?;

        let mut selected_items: Vec<(Product, i64)> = Vec::with_capacity(selections.len());
        for &(product_id, quantity) in selections {
            if quantity <= 0 {
                continue;
            }
            validate_quantity(quantity).map_err(CoreError::from)?;

            let product = self
                .db
                .products()
                .get_by_id(product_id)
                .await?
                .ok_or(CoreError::ProductNotFound(product_id))?;
            selected_items.push((product, quantity));
        }

        let invoice = build_invoice(client_name.trim(), &selected_items);
        let path = self.prepare_path(INVOICE_STEM, "pdf")?;

        write_invoice_pdf(&invoice, &path)?;

        info!(
            user_id = ctx.user_id,
            client = %invoice.client_name,
            lines = invoice.lines.len(),
            total_cents = invoice.total.cents(),
            path = %path.display(),
            "Invoice generated"
        );
        Ok((invoice, path))
    }

    fn prepare_path(&self, stem: &str, ext: &str) -> AppResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(almacen_report::ReportError::from)?;
        Ok(unique_output_path(&self.output_dir, stem, ext))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use almacen_db::DbConfig;
    use almacen_core::types::NewProduct;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.run_migrations().await.unwrap();
        db
    }

    fn ctx() -> AuthContext {
        AuthContext {
            user_id: 1,
            name: "Paula".to_string(),
            email: "paula@example.com".to_string(),
        }
    }

    async fn seed_product(db: &Database, name: &str, quantity: i64, price_cents: i64) -> Product {
        db.products()
            .insert(&NewProduct {
                name: name.to_string(),
                quantity,
                price_cents,
                image_path: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_export_inventory_xlsx() {
        let db = test_db().await;
        seed_product(&db, "Cafe molido 500g", 10, 1250).await;
        let dir = tempfile::tempdir().unwrap();

        let service = ReportService::new(db, dir.path());
        let path = service.export_inventory_xlsx(&ctx()).await.unwrap();

        assert_eq!(path.extension().unwrap(), "xlsx");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_export_inventory_pdf_empty_catalog() {
        let db = test_db().await;
        let dir = tempfile::tempdir().unwrap();

        let service = ReportService::new(db, dir.path());
        let path = service.export_inventory_pdf(&ctx()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_generate_invoice() {
        let db = test_db().await;
        let widget = seed_product(&db, "Widget", 100, 250).await;
        let gadget = seed_product(&db, "Gadget", 50, 1099).await;
        let dir = tempfile::tempdir().unwrap();

        let service = ReportService::new(db, dir.path());
        let (invoice, path) = service
            .generate_invoice(&ctx(), "Alice", &[(widget.id, 4), (gadget.id, 0)])
            .await
            .unwrap();

        // Zero-quantity selection skipped
        assert_eq!(invoice.lines.len(), 1);
        assert_eq!(invoice.total.cents(), 1000);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_generate_invoice_unknown_product() {
        let db = test_db().await;
        let dir = tempfile::tempdir().unwrap();

        let service = ReportService::new(db, dir.path());
        let err = service
            .generate_invoice(&ctx(), "Alice", &[(42, 1)])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::ProductNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_generate_invoice_requires_client_name() {
        let db = test_db().await;
        let dir = tempfile::tempdir().unwrap();

        let service = ReportService::new(db, dir.path());
        let err = service
            .generate_invoice(&ctx(), "   ", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_output_dir_created_on_demand() {
        let db = test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reportes/mensual");

        let service = ReportService::new(db, &nested);
        let path = service.export_inventory_pdf(&ctx()).await.unwrap();

        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }
}
