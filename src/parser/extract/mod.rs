pub mod availability;
pub mod benefits;
pub mod continuation;
pub mod contract_info;
pub mod expenses;
pub mod issue_ages;
pub mod subaccounts;
pub mod surrender;

use thiserror::Error;

use crate::record::SectionValue;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("line {line} names {key:?} without a colon and no line follows")]
    MissingValueLine { key: String, line: usize },
}

pub type ExtractResult = Result<SectionValue, ExtractError>;

/// Output section names paired with their extractors, in output order. Each
/// extractor rescans the full line sequence on its own; none of them share
/// boundary state.
pub const SECTIONS: [(&str, fn(&[&str]) -> ExtractResult); 8] = [
    ("Contract Information", contract_info::extract),
    ("Surrender Schedule", surrender::extract),
    ("Expenses and Fees", expenses::extract),
    ("Benefits and Continuation", continuation::extract),
    ("Issue Ages and Contributions", issue_ages::extract),
    ("Subaccount Information", subaccounts::extract),
    ("Plan Availability", availability::extract),
    ("Summary of Available and Historic Benefits", benefits::extract),
];

/// Index of the first line containing `marker`.
pub(crate) fn section_start(lines: &[&str], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(marker))
}

/// The colon-or-next-line rule: the value for a key found on `lines[idx]` is
/// the text after the first colon when one is present, otherwise the
/// following line.
pub(crate) fn line_value(lines: &[&str], idx: usize, key: &str) -> Result<String, ExtractError> {
    if let Some((_, after)) = lines[idx].split_once(':') {
        return Ok(after.trim().to_string());
    }
    lines
        .get(idx + 1)
        .map(|next| next.trim().to_string())
        .ok_or_else(|| ExtractError::MissingValueLine {
            key: key.to_string(),
            line: idx,
        })
}
