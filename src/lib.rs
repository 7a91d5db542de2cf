//! # Bankload - bank marketing CSV normalization
//!
//! Bankload reads a flat export of bank marketing contact events and splits
//! it into three normalized tables, written back out as CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform   │────▶│  3 CSV files │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (projections)│     │ (client,...) │
//! └─────────────┘     └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bankload::run_etl;
//! use std::path::Path;
//!
//! fn main() {
//!     let summary = run_etl(Path::new("data/bank_marketing.csv")).unwrap();
//!     println!("Normalized {} rows", summary.csv_info.row_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Typed records for the three derived tables
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Coercions, table builders, and pipeline
//! - [`export`] - CSV serialization of the derived tables

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Export
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError, CsvResult, EtlError, EtlResult, ExportError, ExportResult, TransformError,
    TransformResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CampaignRecord, ClientRecord, EconomicsRecord};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_content,
    parse_csv_file_auto, ParseResult,
};

// =============================================================================
// Re-exports - Coercions
// =============================================================================

pub use transform::coerce::{as_string, contact_date, flag, optional_category, underscore_dots};

// =============================================================================
// Re-exports - Table builders
// =============================================================================

pub use transform::tables::{
    build_campaign, build_client, build_economics, check_columns, REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    run_etl, run_etl_in, CsvInfo, EtlSummary, CAMPAIGN_FILE, CLIENT_FILE, ECONOMICS_FILE,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::write_table;
