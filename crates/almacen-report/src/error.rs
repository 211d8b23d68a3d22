//! Error types for report artifact generation.

use std::path::PathBuf;
use thiserror::Error;

/// Report generation errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Spreadsheet writer failed.
    #[error("xlsx export failed: {0}")]
    Xlsx(#[from] xlsxwriter::XlsxError),

    /// PDF rendering failed.
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),

    /// Filesystem error while writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output path is not valid UTF-8 (the xlsx writer requires it).
    #[error("Output path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
