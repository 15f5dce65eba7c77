/// Substrings whose presence marks a populated profile page. Login walls and
/// "no data" placeholders from the portal contain at most a couple of these.
const CONTENT_MARKERS: [&str; 7] = [
    "Contract Information",
    "Share Class",
    "Prospectus Date",
    "Inception Date",
    "Expenses and Fees",
    "Mortality and Expense Risk (M&E)",
    "Summary of Available and Historic Benefits",
];

/// A dump is unusable when fewer than 3 distinct markers appear in it.
pub fn is_empty(text: &str) -> bool {
    let lines: Vec<&str> = text.trim().lines().collect();
    let found = CONTENT_MARKERS
        .iter()
        .filter(|marker| lines.iter().any(|line| line.contains(*marker)))
        .count();
    found < 3
}
