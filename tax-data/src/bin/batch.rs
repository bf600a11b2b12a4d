use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tax_data::BatchCalculator;
use tracing_subscriber::EnvFilter;

/// Calculate withholding tax on severance pay for every row of a CSV file.
///
/// The CSV file should have the following columns:
/// - years_of_service: Whole years of service (1 to 100)
/// - is_disability: Whether retirement was caused by disability (true/false)
/// - is_board_member: Whether the employee was an officer (true/false)
/// - severance_pay: Severance pay in yen (0 to 1,000,000,000,000)
#[derive(Parser, Debug)]
#[command(name = "retirement-tax-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to write the results to (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open: {}", args.input.display()))?;

    let inputs = BatchCalculator::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.input.display()))?;
    tracing::info!(rows = inputs.len(), input = %args.input.display(), "parsed input");

    let records = BatchCalculator::calculate(&inputs);

    match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            BatchCalculator::write(BufWriter::new(out), &records)
                .with_context(|| format!("Failed to write results: {}", path.display()))?;
            eprintln!("Wrote {} results to {}", records.len(), path.display());
        }
        None => {
            BatchCalculator::write(io::stdout().lock(), &records)
                .context("Failed to write results to stdout")?;
        }
    }

    Ok(())
}
