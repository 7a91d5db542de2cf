//! End-to-end ETL run: parse, check columns, build tables, export.
//!
//! # Example
//!
//! ```rust,ignore
//! use bankload::run_etl;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = run_etl(Path::new("data/bank_marketing.csv"))?;
//!     println!("Normalized {} rows", summary.csv_info.row_count);
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::tables::{build_campaign, build_client, build_economics, check_columns};
use crate::error::EtlResult;
use crate::export::write_table;
use crate::models::{CampaignRecord, ClientRecord, EconomicsRecord};
use crate::parser::parse_csv_file_auto;

/// Output file name for the client table.
pub const CLIENT_FILE: &str = "client.csv";
/// Output file name for the campaign table.
pub const CAMPAIGN_FILE: &str = "campaign.csv";
/// Output file name for the economics table.
pub const ECONOMICS_FILE: &str = "economics.csv";

/// Input file metadata
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Result of a complete ETL run
#[derive(Debug, Clone, Serialize)]
pub struct EtlSummary {
    /// Input parsing metadata
    pub csv_info: CsvInfo,
    /// Paths of the three written tables
    pub outputs: Vec<PathBuf>,
}

/// Run the ETL, writing the three tables into the current working
/// directory.
pub fn run_etl(input: &Path) -> EtlResult<EtlSummary> {
    run_etl_in(input, Path::new("."))
}

/// Run the ETL, writing the three tables into `out_dir`.
///
/// Reads the input fully, verifies the required columns before any output
/// is written, then builds and exports `client.csv`, `campaign.csv`, and
/// `economics.csv`. Each table carries one row per input row, in input
/// order. Existing output files are overwritten.
pub fn run_etl_in(input: &Path, out_dir: &Path) -> EtlResult<EtlSummary> {
    let parsed = parse_csv_file_auto(input)?;
    check_columns(&parsed.headers)?;

    let client = build_client(&parsed.records)?;
    let campaign = build_campaign(&parsed.records)?;
    let economics = build_economics(&parsed.records)?;

    let client_path = out_dir.join(CLIENT_FILE);
    let campaign_path = out_dir.join(CAMPAIGN_FILE);
    let economics_path = out_dir.join(ECONOMICS_FILE);

    write_table(&client_path, ClientRecord::COLUMNS, &client)?;
    write_table(&campaign_path, CampaignRecord::COLUMNS, &campaign)?;
    write_table(&economics_path, EconomicsRecord::COLUMNS, &economics)?;

    Ok(EtlSummary {
        csv_info: CsvInfo {
            encoding: parsed.encoding,
            delimiter: parsed.delimiter,
            row_count: parsed.records.len(),
            headers: parsed.headers,
        },
        outputs: vec![client_path, campaign_path, economics_path],
    })
}
