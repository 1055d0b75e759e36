//! Education pass: a bounded section scan that accumulates degree /
//! institution / date fields into entries and keeps the first (assumed most
//! recent) one.

use regex::Regex;
use tracing::debug;

use crate::extract::dates;
use crate::extract::section;
use crate::models::record::CvRecord;

const EDUCATION_HEADERS: &[&str] = &[
    "education",
    "academic background",
    "degrees",
    "qualifications",
    "academic qualifications",
];

const STOP_HEADERS: &[&str] = &[
    "technical skills",
    "professional experience",
    "experience",
    "skills",
    "projects",
    "work history",
    "certifications",
    "publications",
];

const INSTITUTION_KEYWORDS: &[&str] = &["University", "College", "Institute", "School"];

/// One accumulated entry. Flushed when both degree and institution are known.
#[derive(Default)]
struct EntryDraft {
    degree: String,
    institution: String,
    date: String,
}

impl EntryDraft {
    /// Renders "degree | institution [| date]" and resets the draft.
    /// Incomplete drafts are dropped.
    fn flush(&mut self, entries: &mut Vec<String>) {
        if !self.degree.is_empty() && !self.institution.is_empty() {
            let mut entry = format!("{} | {}", self.degree, self.institution);
            if !self.date.is_empty() {
                entry.push_str(" | ");
                entry.push_str(&self.date);
            }
            entries.push(entry);
        }
        *self = EntryDraft::default();
    }
}

pub struct EducationInterpreter {
    degree: Regex,
    year: Regex,
}

impl EducationInterpreter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(EducationInterpreter {
            degree: Regex::new(r"(?i)\b(Master|Bachelor|PhD|Ph\.D|M\.S|B\.S|MBA|B\.A|M\.A)\b")?,
            year: Regex::new(r"\b\d{4}\b")?,
        })
    }

    pub fn apply(&self, text: &str, record: &mut CvRecord) {
        let Some(lines) = section::bounded_section(text, EDUCATION_HEADERS, STOP_HEADERS) else {
            return;
        };

        let mut entries = Vec::new();
        let mut draft = EntryDraft::default();

        for line in lines {
            if line.contains('|') {
                // A pipe-delimited line carries a whole entry; classify its
                // segments with the same rules as standalone lines.
                draft.flush(&mut entries);
                for segment in line.split('|').map(str::trim) {
                    self.classify(segment, &mut draft);
                }
                draft.flush(&mut entries);
            } else if self.degree.is_match(line) {
                // A new degree opens a new entry.
                draft.flush(&mut entries);
                draft.degree = line.to_string();
            } else {
                self.classify(line, &mut draft);
            }
        }
        draft.flush(&mut entries);

        if let Some(first) = entries.first() {
            record.set_education(first.clone());
        } else {
            debug!("education section present but no complete entry found");
        }
    }

    fn classify(&self, line: &str, draft: &mut EntryDraft) {
        if line.is_empty() {
            return;
        }
        if self.degree.is_match(line) && draft.degree.is_empty() {
            draft.degree = line.to_string();
        } else if INSTITUTION_KEYWORDS.iter().any(|kw| line.contains(kw)) {
            draft.institution = line.to_string();
        } else if is_date_line(line, &self.year) {
            draft.date = line.to_string();
        }
    }
}

fn is_date_line(line: &str, year: &Regex) -> bool {
    line.contains("Graduated:") || dates::contains_month(line) || year.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(text: &str) -> CvRecord {
        let mut record = CvRecord::default();
        EducationInterpreter::new().unwrap().apply(text, &mut record);
        record
    }

    #[test]
    fn test_multi_line_entry_accumulates_fields() {
        let text = "Education\nMaster of Science in CS\nState University\nGraduated: May 2022\nSkills\nRust";
        let record = interpret(text);
        assert_eq!(
            record.education(),
            "Master of Science in CS | State University | Graduated: May 2022"
        );
    }

    #[test]
    fn test_entry_without_date_omits_date_field() {
        let text = "Education\nBachelor of Arts\nCity College";
        let record = interpret(text);
        assert_eq!(record.education(), "Bachelor of Arts | City College");
    }

    #[test]
    fn test_first_of_two_entries_wins() {
        let text = "Education\nMaster of Science | State University | May 2022\nBachelor of Arts | City College | May 2018\nExperience\nAcme";
        let record = interpret(text);
        assert_eq!(
            record.education(),
            "Master of Science | State University | May 2022"
        );
    }

    #[test]
    fn test_new_degree_line_flushes_previous_entry() {
        let text = "Education\nMaster of Engineering\nTech Institute\nBachelor of Science\nState College";
        let record = interpret(text);
        assert_eq!(record.education(), "Master of Engineering | Tech Institute");
    }

    #[test]
    fn test_degree_without_institution_is_dropped() {
        let text = "Education\nMaster of Science\nSkills\nRust";
        let record = interpret(text);
        assert_eq!(record.education(), "");
    }

    #[test]
    fn test_no_education_section_leaves_default() {
        let record = interpret("Experience\nAcme | Engineer | 2020 - 2022");
        assert_eq!(record.education(), "");
    }
}
