use crate::record::{FieldRecord, SectionValue};

use super::{line_value, section_start, ExtractResult};

const KEYS: [&str; 4] = [
    "Duration (Years)",
    "Surrender Charge Schedule (%)",
    "Free Withdrawals",
    "Special Conditions",
];

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut record = FieldRecord::new();
    let Some(start) = section_start(lines, "Surrender Schedule") else {
        return Ok(SectionValue::Record(record));
    };
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if line.contains("Surrender Schedule") {
            continue;
        }
        if line.trim().is_empty() {
            // The first blank ends the schedule for good; anything that looks
            // like a schedule key further down is noise from other sections.
            break;
        }
        for key in KEYS {
            if line.contains(key) {
                let value = line_value(lines, i, key)?;
                record.insert_if_absent(key, value);
                break;
            }
        }
    }
    Ok(SectionValue::Record(record))
}
