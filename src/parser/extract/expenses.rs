use crate::record::{FieldRecord, SectionValue};

use super::{ExtractError, ExtractResult};

/// Fee labels. There is deliberately no section gate here: the portal splits
/// fee data across several tabs, so the whole document is scanned. A trigger
/// substring showing up outside its intended section is captured too; that
/// permissive behavior is part of the output contract.
const KEYS: [&str; 10] = [
    "Mortality and Expense Risk (M&E)",
    "Administrative Charge",
    "Distribution Charge",
    "Total Annual Expense",
    "Annual Contract Fee",
    "Anniversary Contract Fee Waived at",
    "M&E Fee",
    "Admin Fee",
    "Annual Policy Fee",
    "Premium Based Sales Charges",
];

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut record = FieldRecord::new();
    for (i, line) in lines.iter().enumerate() {
        if !KEYS.iter().any(|key| line.contains(key)) {
            continue;
        }
        // The key text comes from the line itself, so a re-stated fee
        // overwrites the earlier one.
        match line.split_once(':') {
            Some((key, value)) => record.insert(key.trim(), value.trim()),
            None => {
                let value = lines.get(i + 1).map(|next| next.trim()).ok_or_else(|| {
                    ExtractError::MissingValueLine {
                        key: line.trim().to_string(),
                        line: i,
                    }
                })?;
                record.insert(line.trim(), value);
            }
        }
    }
    Ok(SectionValue::Record(record))
}
