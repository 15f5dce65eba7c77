use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::record::ParsedAnnuity;

/// One harvested row: a contract identifier and the raw text dump of its
/// profile page.
pub struct RawContract {
    pub id: String,
    pub text: String,
}

const EXPECTED_COLUMNS: [&str; 2] = ["Annuity Number", "Page Content"];

/// Read the harvested `(Annuity Number, Page Content)` table. Any problem
/// with the file or its shape is fatal: a partial run produces no output.
pub fn read_contracts(path: &Path) -> Result<Vec<RawContract>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open input file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("cannot read header row of {}", path.display()))?;
    if headers.get(0) != Some(EXPECTED_COLUMNS[0]) || headers.get(1) != Some(EXPECTED_COLUMNS[1]) {
        bail!(
            "{} must start with columns ({}, {}), found {:?}",
            path.display(),
            EXPECTED_COLUMNS[0],
            EXPECTED_COLUMNS[1],
            headers
        );
    }

    let mut contracts = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("malformed row in {}", path.display()))?;
        contracts.push(RawContract {
            id: row.get(0).unwrap_or_default().to_string(),
            text: row.get(1).unwrap_or_default().to_string(),
        });
    }
    Ok(contracts)
}

/// Write the parsed batch as pretty-printed JSON, one object per annuity, in
/// input order. Non-ASCII text from the portal is written as-is.
pub fn write_batch(path: &Path, batch: &[ParsedAnnuity]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, batch)
        .with_context(|| format!("cannot serialize batch to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
