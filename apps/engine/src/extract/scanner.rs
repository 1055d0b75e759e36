//! Line scanning and text utilities shared by every interpreter.

/// Splits a document into an ordered sequence of trimmed lines. Line-break
/// characters are never part of a yielded line; empty input yields an empty
/// sequence. The scan is restartable by calling it again on the same text.
pub fn scan(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim)
}

/// Case-folds a line for header and keyword comparisons.
pub fn case_fold(line: &str) -> String {
    line.to_lowercase()
}
