use crate::record::{FieldRecord, SectionValue};

use super::{line_value, ExtractResult};

/// Labels from the contract header area. The portal renders them in varying
/// order, so every line is scanned against every key.
const KEYS: [&str; 10] = [
    "Share Class",
    "Prospectus Date",
    "Supplement Date",
    "Date of Last Update",
    "Inception Date",
    "Closed Date",
    "AM Best Rating",
    "Website",
    "Phone Number",
    "State Availability",
];

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut record = FieldRecord::new();
    for (i, line) in lines.iter().enumerate() {
        let lower = line.trim().to_lowercase();
        for key in KEYS {
            if lower.contains(&key.to_lowercase()) {
                // A label on the final line with no colon has no value to
                // read; drop the key, keep the section.
                if let Ok(value) = line_value(lines, i, key) {
                    record.insert_if_absent(key, value);
                }
                break; // a line feeds at most one key
            }
        }
    }
    Ok(SectionValue::Record(record))
}
