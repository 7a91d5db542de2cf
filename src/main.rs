//! Bankload CLI - Normalize bank marketing CSV exports
//!
//! ```bash
//! bankload                          # Process data/bank_marketing.csv
//! bankload path/to/export.csv      # Process a specific export
//! ```
//!
//! Writes `client.csv`, `campaign.csv`, and `economics.csv` into the
//! current working directory, overwriting any existing files.

use clap::Parser;
use std::path::{Path, PathBuf};

use bankload::{run_etl, EtlResult};

#[derive(Parser)]
#[command(name = "bankload")]
#[command(
    about = "Normalize bank marketing CSV exports into client, campaign, and economics tables",
    long_about = None
)]
struct Cli {
    /// Input CSV file
    #[arg(default_value = "data/bank_marketing.csv")]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.input) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(input: &Path) -> EtlResult<()> {
    eprintln!("📄 Processing: {}", input.display());

    let summary = run_etl(input)?;

    eprintln!("   Encoding: {}", summary.csv_info.encoding);
    eprintln!(
        "   Delimiter: '{}'",
        format_delimiter(summary.csv_info.delimiter)
    );
    eprintln!("   Rows: {}", summary.csv_info.row_count);
    eprintln!("   Columns: {}", summary.csv_info.headers.join(", "));

    for path in &summary.outputs {
        eprintln!("   💾 Wrote: {}", path.display());
    }

    eprintln!("✨ Done!");
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
