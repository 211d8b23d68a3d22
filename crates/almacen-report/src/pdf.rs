//! # PDF Documents
//!
//! Renders the two line-oriented documents: the inventory report and the
//! client invoice. Both are simple A4 pages of Helvetica text lines, with
//! a page break when a page fills up.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::debug;

use crate::error::ReportResult;
use almacen_core::invoice::{Invoice, INVOICE_TITLE};
use almacen_core::report::{inventory_report_lines, INVENTORY_REPORT_TITLE};
use almacen_core::types::Product;

// A4 portrait geometry, millimetres
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TOP_Y_MM: f32 = 270.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_STEP_MM: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

// =============================================================================
// Line Writer
// =============================================================================

/// Cursor-style writer for line-oriented PDF documents.
///
/// Tracks the vertical position and starts a fresh page when the next line
/// would fall below the bottom margin.
struct LineWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    y: f32,
}

impl LineWriter {
    fn new(document_title: &str) -> ReportResult<Self> {
        let (doc, page, layer) = PdfDocument::new(
            document_title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(LineWriter {
            doc,
            layer,
            font,
            y: TOP_Y_MM,
        })
    }

    fn write_line(&mut self, text: &str, size: f32) {
        if self.y < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y_MM;
        }

        self.layer
            .use_text(text, size, Mm(LEFT_MARGIN_MM), Mm(self.y), &self.font);
        self.y -= LINE_STEP_MM;
    }

    fn vertical_gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn save(self, path: &Path) -> ReportResult<()> {
        self.doc.save(&mut BufWriter::new(File::create(path)?))?;
        Ok(())
    }
}

// =============================================================================
// Documents
// =============================================================================

/// Writes the inventory report PDF: a title followed by one line per
/// product in the store's natural row order.
pub fn write_inventory_pdf(products: &[Product], path: &Path) -> ReportResult<()> {
    debug!(products = products.len(), path = %path.display(), "Writing inventory PDF");

    let mut writer = LineWriter::new(INVENTORY_REPORT_TITLE)?;

    writer.write_line(INVENTORY_REPORT_TITLE, TITLE_SIZE);
    writer.vertical_gap(5.0);

    for line in inventory_report_lines(products) {
        writer.write_line(&line, BODY_SIZE);
    }

    writer.save(path)
}

/// Writes the client invoice PDF: title, client header, one line per
/// invoice line, and the grand total.
pub fn write_invoice_pdf(invoice: &Invoice, path: &Path) -> ReportResult<()> {
    debug!(
        client = %invoice.client_name,
        lines = invoice.lines.len(),
        path = %path.display(),
        "Writing invoice PDF"
    );

    let mut writer = LineWriter::new(INVOICE_TITLE)?;

    writer.write_line(INVOICE_TITLE, TITLE_SIZE);
    writer.vertical_gap(5.0);
    writer.write_line(&invoice.client_line(), BODY_SIZE);
    writer.vertical_gap(5.0);

    for line in &invoice.lines {
        writer.write_line(&line.render(), BODY_SIZE);
    }

    writer.vertical_gap(5.0);
    writer.write_line(&invoice.total_line(), BODY_SIZE);

    writer.save(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
