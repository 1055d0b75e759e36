//! Month-name and year token helpers for date-bearing lines.

/// English month names, January first. Abbreviations of three or more
/// letters ("Sep", "Sept", "September") resolve to the same month.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolves a month token (name or abbreviation) to 1..=12.
pub fn parse_month(token: &str) -> Option<u32> {
    let folded = token.trim().to_lowercase();
    if folded.len() < 3 {
        return None;
    }
    // Prefix matching covers "Jan", "Sept" and the full names alike.
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&folded))
        .map(|index| index as u32 + 1)
}

/// Returns whether the line carries a month name token.
pub fn contains_month(line: &str) -> bool {
    let folded = line.to_lowercase();
    folded
        .split(|c: char| !c.is_ascii_alphabetic())
        .any(|word| word.len() >= 3 && parse_month(word).is_some())
}

/// Expands a two-digit year into the 2000s; four-digit years pass through.
pub fn expand_year(year: i32) -> i32 {
    if year < 100 {
        year + 2000
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_full_names() {
        assert_eq!(parse_month("January"), Some(1));
        assert_eq!(parse_month("december"), Some(12));
    }

    #[test]
    fn test_parse_month_abbreviations() {
        assert_eq!(parse_month("Jan"), Some(1));
        assert_eq!(parse_month("Sep"), Some(9));
        assert_eq!(parse_month("Sept"), Some(9));
    }

    #[test]
    fn test_parse_month_rejects_short_or_unknown_tokens() {
        assert_eq!(parse_month("Fe"), None);
        assert_eq!(parse_month("Smarch"), None);
    }

    #[test]
    fn test_contains_month() {
        assert!(contains_month("Graduated: May 2022"));
        assert!(!contains_month("State University"));
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_year(21), 2021);
        assert_eq!(expand_year(1998), 1998);
    }
}
