mod io;
mod parser;
mod record;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "annuity_parser",
    about = "Parse harvested annuity profile dumps into structured JSON"
)]
struct Cli {
    /// Harvested (Annuity Number, Page Content) table
    #[arg(long, default_value = "annuity_data.csv")]
    input: PathBuf,

    /// Destination for the parsed JSON document
    #[arg(long, default_value = "parsed_annuities.json")]
    output: PathBuf,

    /// Parse only the first N rows
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

/// Parse every contract in input order. Rows the classifier rejects are
/// logged and counted, not carried into the batch.
fn parse_batch(
    contracts: &[io::RawContract],
    progress: &ProgressBar,
) -> (Vec<record::ParsedAnnuity>, usize) {
    let mut batch = Vec::new();
    let mut skipped = 0usize;
    for contract in contracts {
        match parser::parse_contract(&contract.id, &contract.text) {
            Some(annuity) => batch.push(annuity),
            None => {
                info!("Skipping empty annuity data for Annuity {}", contract.id);
                skipped += 1;
            }
        }
        progress.inc(1);
    }
    (batch, skipped)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut contracts = io::read_contracts(&cli.input)?;
    if let Some(n) = cli.limit {
        contracts.truncate(n);
    }
    println!("Parsing {} contracts from {}...", contracts.len(), cli.input.display());

    let pb = ProgressBar::new(contracts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let (batch, skipped) = parse_batch(&contracts, &pb);
    pb.finish_and_clear();

    io::write_batch(&cli.output, &batch)?;
    println!(
        "Parsed {} annuities ({} empty rows skipped). Results saved to {}",
        batch.len(),
        skipped,
        cli.output.display()
    );
    Ok(())
}
