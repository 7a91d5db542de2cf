//! Error types for the bankload ETL pipeline.
//!
//! This module defines one error type per pipeline stage:
//!
//! - [`CsvError`] - input reading and parsing errors
//! - [`TransformError`] - table projection errors
//! - [`ExportError`] - output serialization errors
//! - [`EtlError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Only two conditions are fatal by contract: an unreadable source file
//! ([`CsvError::SourceNotFound`]) and a required column absent from the
//! input ([`TransformError::MissingColumn`]). Unrecognized categorical
//! values and unparseable dates are absorbed into false/null during the
//! transform and never surface here.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading and parsing the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input path does not exist or is unreadable.
    #[error("Cannot read input file '{}': {}", .path.display(), .source)]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contains no header row.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Malformed CSV content.
    #[error("Invalid CSV format: {0}")]
    ParseError(String),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while projecting input rows into the derived tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required source column is absent from the input header.
    #[error("Missing source column: {0}")]
    MissingColumn(String),

    /// A value could not be coerced to the column's type.
    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    InvalidValue {
        column: String,
        row: usize,
        message: String,
    },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the derived tables to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// ETL Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::run_etl`]. It wraps all lower-level errors.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Input reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Projection error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output writing error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline operations.
pub type EtlResult<T> = Result<T, EtlError>;
