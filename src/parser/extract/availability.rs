use crate::record::{FieldRecord, SectionValue};

use super::{line_value, ExtractResult};

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut record = FieldRecord::new();
    // Both keys are emitted even when never matched, so this section always
    // appears in the output record.
    record.insert("Plan Availability", "");
    record.insert("Surrender Charge Waivers", "");
    for (i, line) in lines.iter().enumerate() {
        if line.contains("Plan Availability") {
            // Unlike the other sections, a later match overwrites an earlier
            // one here; the source system emits the last occurrence, and the
            // output has to line up with it.
            let value = line_value(lines, i, "Plan Availability")?;
            record.insert("Plan Availability", value);
        } else if line.contains("Surrender Charge Waivers") {
            let value = line_value(lines, i, "Surrender Charge Waivers")?;
            record.insert("Surrender Charge Waivers", value);
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
    fn both_keys_present_even_without_matches() {
        let r = fields("nothing relevant");
        assert_eq!(r.get_text("Plan Availability"), Some(""));
        assert_eq!(r.get_text("Surrender Charge Waivers"), Some(""));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn colon_and_next_line_values() {
        let r = fields("Plan Availability: IRA, Roth IRA\nSurrender Charge Waivers\nNursing home");
        assert_eq!(r.get_text("Plan Availability"), Some("IRA, Roth IRA"));
        assert_eq!(r.get_text("Surrender Charge Waivers"), Some("Nursing home"));
    }

    #[test]
    fn last_match_wins() {
        let r = fields("Plan Availability: IRA\nPlan Availability: 403(b)");
        assert_eq!(r.get_text("Plan Availability"), Some("403(b)"));
    }

    #[test]
    fn line_matching_both_keys_only_feeds_plan_availability() {
        let r = fields("Plan Availability and Surrender Charge Waivers: see below");
        assert_eq!(r.get_text("Plan Availability"), Some("see below"));
        assert_eq!(r.get_text("Surrender Charge Waivers"), Some(""));
    }

    #[test]
    fn label_on_final_line_without_colon_fails_section() {
        let lines = vec!["Plan Availability"];
        assert!(extract(&lines).is_err());
    }
}
