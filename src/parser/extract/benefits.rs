use crate::record::{FieldRecord, SectionValue};

use super::{section_start, ExtractResult};

/// Column labels of the benefits table. Data lines cycle through them in
/// strict round-robin; the labels themselves appear interleaved in the dump
/// and are skipped.
const FIELDS: [&str; 5] = [
    "Benefit Name",
    "Inception Date",
    "Close Date",
    "Benefit Type",
    "Impact of Withdrawals",
];

const TERMINATOR: &str = "Select sort field:";

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut benefits: Vec<FieldRecord> = Vec::new();
    let Some(start) = section_start(lines, "Summary of Available and Historic Benefits") else {
        return Ok(SectionValue::Records(benefits));
    };

    let mut current = FieldRecord::new();
    let mut slot = 0usize;
    for line in &lines[start + 1..] {
        let line = line.trim();
        if line.contains("Summary of Available and Historic Benefits") {
            continue;
        }
        if line == TERMINATOR {
            break;
        }
        if line.is_empty() || FIELDS.contains(&line) {
            continue;
        }
        current.insert(FIELDS[slot], line);
        slot += 1;
        if slot == FIELDS.len() {
            benefits.push(std::mem::take(&mut current));
            slot = 0;
        }
    }
    // A trailing group that never filled all five slots is dropped.
    Ok(SectionValue::Records(benefits))
}
