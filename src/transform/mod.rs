//! Transformation module.
//!
//! This module turns parsed input rows into the three derived tables:
//! - Coerce: per-value coercions (flags, substitutions, date synthesis)
//! - Tables: column check and the three table builders
//! - Pipeline: end-to-end ETL run

pub mod coerce;
pub mod pipeline;
pub mod tables;

pub use coerce::{as_string, contact_date, flag, optional_category, underscore_dots};
pub use pipeline::*;
pub use tables::{build_campaign, build_client, build_economics, check_columns, REQUIRED_COLUMNS};
