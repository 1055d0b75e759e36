//! Personal information pass: contact regex sweep, name detection, and the
//! about/summary block.

use regex::Regex;

use crate::extract::scanner;
use crate::extract::section;
use crate::models::record::CvRecord;

/// Header phrases that open an about/summary block (lower-cased).
const ABOUT_HEADERS: &[&str] = &["about", "summary", "profile", "objective", "personal statement"];

/// Major section headers that close an about block.
const ABOUT_STOP_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "work",
    "employment",
];

/// Lines containing these phrases are never name candidates: document
/// boilerplate and common job-title words that are frequently set in the
/// same prominent position as the name.
const NAME_BLACKLIST: &[&str] = &[
    "resume",
    "curriculum vitae",
    "contact",
    "about",
    "summary",
    "profile",
    "objective",
    "education",
    "experience",
    "skills",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "consultant",
    "designer",
    "architect",
    "scientist",
    "specialist",
    "administrator",
];

pub struct PersonalInfoInterpreter {
    email: Regex,
    linkedin: Regex,
    github: Regex,
    name: Regex,
}

impl PersonalInfoInterpreter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(PersonalInfoInterpreter {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            linkedin: Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9-]+/?")?,
            github: Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9-]+/?")?,
            // Two or more whitespace-separated capitalized word tokens,
            // spanning the whole line.
            name: Regex::new(r"^[A-Z][A-Za-z'-]+(?:\s+[A-Z][A-Za-z'-]+)+$")?,
        })
    }

    pub fn apply(&self, text: &str, record: &mut CvRecord) {
        // Document-wide sweep; the first match for each contact field wins.
        if let Some(m) = self.email.find(text) {
            record.set_email(m.as_str());
        }
        if let Some(m) = self.linkedin.find(text) {
            record.set_linkedin(m.as_str());
        }
        if let Some(m) = self.github.find(text) {
            record.set_github(m.as_str());
        }

        if let Some((name, surname)) = self.find_name(text) {
            record.set_name(name, surname);
        }

        if let Some(lines) = section::bounded_section(text, ABOUT_HEADERS, ABOUT_STOP_HEADERS) {
            record.set_about(lines.join("\n"));
        }
    }

    /// Short-circuiting top-to-bottom scan for the first plausible name line.
    /// The first token becomes the name, the remaining tokens the surname.
    fn find_name(&self, text: &str) -> Option<(String, String)> {
        scanner::scan(text)
            .filter(|line| !line.is_empty() && !is_blacklisted(line))
            .find(|line| self.name.is_match(line))
            .map(|line| {
                let mut tokens = line.split_whitespace();
                let name = tokens.next().unwrap_or_default().to_string();
                let surname = tokens.collect::<Vec<_>>().join(" ");
                (name, surname)
            })
    }
}

fn is_blacklisted(line: &str) -> bool {
    let folded = scanner::case_fold(line);
    NAME_BLACKLIST.iter().any(|phrase| folded.contains(phrase))
}
