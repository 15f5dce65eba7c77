pub mod classify;
pub mod extract;

use tracing::warn;

use crate::record::ParsedAnnuity;

/// Parse one contract's text dump: gate on the emptiness classifier, then run
/// every section extractor over the same line view and merge what they found.
///
/// Returns `None` for dumps the classifier rejects. A single extractor
/// failing is logged and costs only its own section; siblings still run.
pub fn parse_contract(id: &str, text: &str) -> Option<ParsedAnnuity> {
    if classify::is_empty(text) {
        return None;
    }

    let lines: Vec<&str> = text.lines().collect();
    let mut annuity = ParsedAnnuity::new(id);
    for (name, extractor) in extract::SECTIONS {
        match extractor(&lines) {
            Ok(value) if !value.is_empty() => annuity.push_section(name, value),
            Ok(_) => {} // section not found, key omitted
            Err(e) => warn!("Error parsing {} for Annuity {}: {}", name, id, e),
        }
    }
    Some(annuity)
}

// ── Tests ──
