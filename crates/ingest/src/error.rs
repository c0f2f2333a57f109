//! Ingestion error model.

use thiserror::Error;

/// Result type for file ingestion.
pub type IngestResult<T> = Result<T, IngestError>;

/// Failure while reading, interpreting, or writing a data file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("spreadsheet error in {path}: {source}")]
    Xlsx {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("unsupported file extension: {path} (expected .csv or .xlsx)")]
    UnsupportedExtension { path: String },

    #[error("the file is empty: {path}")]
    EmptyFile { path: String },

    #[error("required columns not found: {missing}; available columns: {available}")]
    MissingColumns { missing: String, available: String },

    #[error("row {row}: cannot read '{value}' as a quantity")]
    InvalidQuantity { row: usize, value: String },

    #[error(transparent)]
    Domain(#[from] skumap_core::DomainError),
}
