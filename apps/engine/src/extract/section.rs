//! Section boundary detection.
//!
//! A section header is a line whose case-folded text begins with one of a
//! fixed set of lower-cased phrases. Classification is binary: the caller
//! learns that a header matched, not which phrase matched.

use crate::extract::scanner;

/// Returns whether the case-folded line begins with any of the given
/// lower-cased header phrases.
pub fn opens_section(line: &str, headers: &[&str]) -> bool {
    let folded = scanner::case_fold(line);
    headers.iter().any(|header| folded.starts_with(header))
}

/// Bounded section scan: collects the trimmed, non-empty lines strictly
/// inside the first section opened by `headers` and closed by either a
/// `stop_headers` match or end of input. Returns `None` when no opening
/// header exists in the document.
pub fn bounded_section<'a>(
    text: &'a str,
    headers: &[&str],
    stop_headers: &[&str],
) -> Option<Vec<&'a str>> {
    let mut inside = false;
    let mut lines = Vec::new();

    for line in scanner::scan(text) {
        if line.is_empty() {
            continue;
        }
        if inside {
            if opens_section(line, stop_headers) {
                break;
            }
            lines.push(line);
        } else if opens_section(line, headers) {
            inside = true;
        }
    }

    inside.then_some(lines)
}
