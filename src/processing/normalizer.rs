use crate::models::NormalizedText;

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits on line breaks, trims each line and drops the empty ones.
/// Order is preserved; the name heuristic depends on it.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText {
        collapsed: collapse_whitespace(text),
        lines: split_lines(text),
    }
}
