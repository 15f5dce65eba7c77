use crate::record::{FieldRecord, SectionValue};

use super::ExtractResult;

const FIELDS: [&str; 4] = [
    "Number of Subaccounts",
    "Subaccount Fee Range",
    "Free Transfers Per Year",
    "Transfer Fee",
];

/// Minimum lines collected before a blank is trusted as the section end. The
/// portal emits stray blanks between the header and the data table.
const MIN_LINES_BEFORE_BLANK: usize = 9;

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;
    for line in lines {
        if line.contains("Subaccount Information") {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() && collected.len() >= MIN_LINES_BEFORE_BLANK {
            break;
        }
        collected.push(trimmed);
    }

    // The count of subaccounts is the first digit-only line; the three fields
    // after it follow in fixed order.
    let mut record = FieldRecord::new();
    let data_start = collected
        .iter()
        .position(|l| !l.is_empty() && l.chars().all(|c| c.is_ascii_digit()));
    if let Some(start) = data_start {
        if collected.len() >= start + FIELDS.len() {
            for (offset, field) in FIELDS.iter().enumerate() {
                record.insert(*field, collected[start + offset]);
            }
        }
    }
    Ok(SectionValue::Record(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(text: &str) -> FieldRecord {
        let lines: Vec<&str> = text.lines().collect();
        match extract(&lines).unwrap() {
            SectionValue::Record(r) => r,
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[test]
    fn reads_four_fields_from_first_digit_line() {
        let text = "Subaccount Information\n\
                    as of 12/31/2023\nranges reflect prospectus\nmanaged funds\n\
                    categories\nTotals\nFees\nTransfers\nCharges\n\
                    4\n0.50%-1.25%\n12\n$25\n\nlater text";
        let r = fields(text);
        assert_eq!(r.get_text("Number of Subaccounts"), Some("4"));
        assert_eq!(r.get_text("Subaccount Fee Range"), Some("0.50%-1.25%"));
        assert_eq!(r.get_text("Free Transfers Per Year"), Some("12"));
        assert_eq!(r.get_text("Transfer Fee"), Some("$25"));
    }

    #[test]
    fn early_blank_lines_are_collected_not_terminal() {
        // Blanks right after the header don't end the section; the guard only
        // trusts a blank after nine collected lines.
        let text = "Subaccount Information\n\n\nheader a\nheader b\nheader c\n\
                    header d\nheader e\n57\n0.45%-2.15%\n12\n$25\n\ntail";
        let r = fields(text);
        assert_eq!(r.get_text("Number of Subaccounts"), Some("57"));
        assert_eq!(r.get_text("Transfer Fee"), Some("$25"));
    }

    #[test]
    fn no_digit_line_yields_empty() {
        let r = fields("Subaccount Information\nalpha\nbeta\ngamma");
        assert!(r.is_empty());
    }

    #[test]
    fn too_few_entries_after_digit_line_yields_empty() {
        let r = fields("Subaccount Information\n4\n0.50%-1.25%");
        assert!(r.is_empty());
    }

    #[test]
    fn no_header_yields_empty() {
        let r = fields("4\n0.50%-1.25%\n12\n$25");
        assert!(r.is_empty());
    }
}
