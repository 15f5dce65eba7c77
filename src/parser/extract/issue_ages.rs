use crate::record::{FieldRecord, SectionValue};

use super::{section_start, ExtractResult};

const PLAN_TYPES: [&str; 2] = ["Qualified", "Non-Qualified"];

/// The portal lists these four values per plan type as bare lines in a fixed
/// order, with no labels. Positional fill means malformed input with extra
/// lines shifts later fields; that fragility is part of the output contract.
const PLAN_FIELDS: [&str; 4] = ["Min-Max Age", "Life(ives)", "Initial", "Subsequent"];

pub fn extract(lines: &[&str]) -> ExtractResult {
    let mut plans: Vec<(String, FieldRecord)> = Vec::new();
    let mut current: Option<usize> = None;
    let mut max_annuitization: Option<String> = None;

    if let Some(start) = section_start(lines, "Issue Ages and Contributions") {
        for line in &lines[start + 1..] {
            let line = line.trim();
            if line.contains("Issue Ages and Contributions") {
                continue;
            }
            if PLAN_TYPES.contains(&line) {
                // A repeated plan marker resets that plan's slots.
                match plans.iter().position(|(name, _)| name == line) {
                    Some(idx) => {
                        plans[idx].1 = FieldRecord::new();
                        current = Some(idx);
                    }
                    None => {
                        plans.push((line.to_string(), FieldRecord::new()));
                        current = Some(plans.len() - 1);
                    }
                }
            } else if !line.is_empty() {
                if let Some(idx) = current {
                    let record = &mut plans[idx].1;
                    if let Some(field) = PLAN_FIELDS.iter().find(|&&f| !record.contains_key(f)) {
                        record.insert(*field, line);
                    }
                }
            }

            // Checked on every in-section line, including ones already
            // consumed by positional fill.
            if line.contains("Maximum Annuitization Age") {
                let raw = line.rsplit_once(':').map(|(_, after)| after).unwrap_or(line);
                max_annuitization = Some(raw.trim().trim_end_matches(';').to_string());
            }

            if line.starts_with("Subaccount Information") {
                break;
            }
        }
    }

    let mut plan_map = FieldRecord::new();
    for (name, record) in plans {
        plan_map.insert(name, record);
    }
    let mut result = FieldRecord::new();
    // "Plan Type" is emitted even when empty, so this section always appears
    // in the output record.
    result.insert("Plan Type", plan_map);
    if let Some(age) = max_annuitization {
        result.insert("Maximum Annuitization Age", age);
    }
    Ok(SectionValue::Record(result))
}
