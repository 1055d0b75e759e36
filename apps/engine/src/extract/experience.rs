//! Experience pass: structured "title | company | year-range" records inside
//! a bounded section (or the whole document), with a bare year-range fallback
//! when nothing structured is found.

use chrono::Datelike;
use regex::Regex;
use tracing::debug;

use crate::extract::dates;
use crate::extract::scanner;
use crate::extract::section;
use crate::models::record::CvRecord;

const EXPERIENCE_HEADERS: &[&str] = &[
    "professional experience",
    "work experience",
    "experience",
    "employment history",
    "work history",
    "employment",
];

const STOP_HEADERS: &[&str] = &[
    "education",
    "technical skills",
    "skills",
    "projects",
    "certifications",
    "publications",
];

const MONTH_PATTERN: &str = r"Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

pub struct ExperienceInterpreter {
    structured: Regex,
    bare_range: Regex,
}

impl ExperienceInterpreter {
    pub fn new() -> Result<Self, regex::Error> {
        let structured = format!(
            r"(?i)^(?P<title>[^|]+)\|(?P<company>[^|]+)\|\s*(?:(?P<sm>{MONTH_PATTERN})\s+)?(?P<sy>\d{{4}}|\d{{2}})\s*(?:-|–|to)\s*(?:(?P<em>{MONTH_PATTERN})\s+)?(?P<ey>\d{{4}}|\d{{2}}|Present|Current)\s*$"
        );
        Ok(ExperienceInterpreter {
            structured: Regex::new(&structured)?,
            bare_range: Regex::new(
                r"(?i)\b(?P<sy>\d{4})\s*(?:-|–|to)\s*(?P<ey>\d{4}|\d{2}|Present|Current)\b",
            )?,
        })
    }

    pub fn apply(&self, text: &str, record: &mut CvRecord) {
        self.apply_with_year(text, record, chrono::Utc::now().year());
    }

    /// `current_year` resolves "Present"/"Current" endpoints; injected so
    /// tests can pin the clock.
    pub fn apply_with_year(&self, text: &str, record: &mut CvRecord, current_year: i32) {
        if self.structured_entries(text, record, current_year) == 0 {
            self.fallback_entries(text, record, current_year);
        }
    }

    /// Primary strategy: structured records inside the experience section, or
    /// anywhere in the document when no section header exists. Returns the
    /// number of entries recorded.
    fn structured_entries(&self, text: &str, record: &mut CvRecord, current_year: i32) -> usize {
        let lines = section::bounded_section(text, EXPERIENCE_HEADERS, STOP_HEADERS)
            .unwrap_or_else(|| scanner::scan(text).collect());

        let mut recorded = 0;
        for line in lines {
            let Some(caps) = self.structured.captures(line) else {
                continue;
            };
            let Some(months) = duration_months(&caps, current_year) else {
                debug!(line, "skipping experience entry with unusable year range");
                continue;
            };
            let title = caps["title"].trim().to_string();
            let company = caps["company"].trim().to_string();
            record.add_experience(format!("{company} ({title})"), months);
            recorded += 1;
        }
        recorded
    }

    /// Fallback strategy: bare year ranges anywhere in the document, recorded
    /// under synthetic labels since no company or title can be associated.
    fn fallback_entries(&self, text: &str, record: &mut CvRecord, current_year: i32) {
        for caps in self.bare_range.captures_iter(text) {
            let Some((start, end)) = year_range(&caps, current_year) else {
                continue;
            };
            let months = (end - start) * 12;
            if months > 0 {
                record.add_experience(format!("Experience {start}-{end}"), months);
            }
        }
    }
}

/// Resolves the start/end years of a match, expanding two-digit years and
/// mapping Present/Current to the current year.
fn year_range(caps: &regex::Captures<'_>, current_year: i32) -> Option<(i32, i32)> {
    let start = dates::expand_year(caps["sy"].parse().ok()?);
    let end_token = &caps["ey"];
    let end = if end_token.eq_ignore_ascii_case("present")
        || end_token.eq_ignore_ascii_case("current")
    {
        current_year
    } else {
        dates::expand_year(end_token.parse().ok()?)
    };
    Some((start, end))
}

/// Duration in months for a structured match. Month-level precision applies
/// only when both endpoints carry a month token (end month exclusive);
/// otherwise whole years are compared. Non-positive durations are discarded.
fn duration_months(caps: &regex::Captures<'_>, current_year: i32) -> Option<i32> {
    let (start, end) = year_range(caps, current_year)?;
    let months = match (
        caps.name("sm").and_then(|m| dates::parse_month(m.as_str())),
        caps.name("em").and_then(|m| dates::parse_month(m.as_str())),
    ) {
        (Some(sm), Some(em)) => (end - start) * 12 + (em as i32 - sm as i32),
        _ => (end - start) * 12,
    };
    (months > 0).then_some(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret_at(text: &str, year: i32) -> CvRecord {
        let mut record = CvRecord::default();
        ExperienceInterpreter::new()
            .unwrap()
            .apply_with_year(text, &mut record, year);
        record
    }

    #[test]
    fn test_structured_entry_with_present_end() {
        let record = interpret_at("Backend Engineer | Acme | 2020 - Present", 2025);
        assert_eq!(record.experience().get("Acme (Backend Engineer)"), Some(&60));
    }

    #[test]
    fn test_structured_entry_inside_section() {
        let text = "Professional Experience\nData Analyst | Initech | 2018 - 2021\nEducation\nState University";
        let record = interpret_at(text, 2025);
        assert_eq!(record.experience().get("Initech (Data Analyst)"), Some(&36));
    }

    #[test]
    fn test_month_precision_when_both_endpoints_carry_months() {
        let record = interpret_at("Engineer | Acme | Jan 2020 - Mar 2021", 2025);
        assert_eq!(record.experience().get("Acme (Engineer)"), Some(&14));
    }

    #[test]
    fn test_single_month_token_falls_back_to_whole_years() {
        let record = interpret_at("Engineer | Acme | Jan 2020 - 2021", 2025);
        assert_eq!(record.experience().get("Acme (Engineer)"), Some(&12));
    }

    #[test]
    fn test_two_digit_years_expand_to_2000s() {
        let record = interpret_at("Engineer | Acme | 19 - 22", 2025);
        assert_eq!(record.experience().get("Acme (Engineer)"), Some(&36));
    }

    #[test]
    fn test_reversed_range_is_dropped() {
        let record = interpret_at("Engineer | Acme | 2022 - 2020", 2025);
        assert!(record.experience().is_empty());
    }

    #[test]
    fn test_zero_duration_is_dropped() {
        let record = interpret_at("Engineer | Acme | 2020 - 2020", 2025);
        assert!(record.experience().is_empty());
    }

    #[test]
    fn test_fallback_bare_ranges_use_synthetic_labels() {
        let text = "Worked on various things\n2019 - 2021 doing backend work\n2015 - 2016 at a startup";
        let record = interpret_at(text, 2025);
        assert_eq!(record.experience().get("Experience 2019-2021"), Some(&24));
        assert_eq!(record.experience().get("Experience 2015-2016"), Some(&12));
    }

    #[test]
    fn test_fallback_not_used_when_structured_entry_exists() {
        let text = "Engineer | Acme | 2020 - 2022\nAlso 2010 - 2012 somewhere";
        let record = interpret_at(text, 2025);
        assert_eq!(record.experience().len(), 1);
        assert!(record.experience().contains_key("Acme (Engineer)"));
    }

    #[test]
    fn test_fallback_present_resolves_to_current_year() {
        let record = interpret_at("2020 - Present", 2025);
        assert_eq!(record.experience().get("Experience 2020-2025"), Some(&60));
    }

    #[test]
    fn test_distinct_employers_get_distinct_keys() {
        let text = "Professional Experience\nEngineer | Acme | 2018 - 2020\nSenior Engineer | Globex | 2020 - 2023\nEducation\nX University";
        let record = interpret_at(text, 2025);
        assert_eq!(record.experience().len(), 2);
        assert_eq!(record.experience().get("Acme (Engineer)"), Some(&24));
        assert_eq!(record.experience().get("Globex (Senior Engineer)"), Some(&36));
    }
}
