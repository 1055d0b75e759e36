//! Skills pass: a bounded section scan into a raw buffer, then line-by-line
//! tokenization of categorized and flat bullet lists.

use regex::Regex;

use crate::extract::section;
use crate::models::record::CvRecord;

const SKILL_HEADERS: &[&str] = &[
    "technical skills",
    "skills",
    "key skills",
    "core competencies",
    "technologies",
    "expertise",
];

const STOP_HEADERS: &[&str] = &[
    "professional experience",
    "experience",
    "education",
    "projects",
    "work history",
    "employment",
    "certifications",
];

pub struct SkillsInterpreter {
    bullet: Regex,
}

impl SkillsInterpreter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(SkillsInterpreter {
            // A single leading bullet or numbering marker.
            bullet: Regex::new(r"^(?:[•\-*]|\d+\.)\s*")?,
        })
    }

    pub fn apply(&self, text: &str, record: &mut CvRecord) {
        let Some(lines) = section::bounded_section(text, SKILL_HEADERS, STOP_HEADERS) else {
            return;
        };

        for line in lines {
            // "label: rest" discards the category label and splits the rest;
            // pipes are kept intact inside categorized lists.
            if let Some((label, rest)) = line.split_once(':') {
                if !label.trim().is_empty() && !rest.trim().is_empty() {
                    push_tokens(record, rest, &[',', ';']);
                    continue;
                }
            }
            let stripped = self.bullet.replace(line, "");
            push_tokens(record, &stripped, &[',', ';', '|']);
        }
    }
}

fn push_tokens(record: &mut CvRecord, text: &str, separators: &[char]) {
    for token in text.split(separators) {
        let token = token.trim();
        if !token.is_empty() {
            record.add_skill(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(text: &str) -> Vec<String> {
        let mut record = CvRecord::default();
        SkillsInterpreter::new().unwrap().apply(text, &mut record);
        record.skills().to_vec()
    }

    #[test]
    fn test_categorized_line_discards_label() {
        let skills = interpret("Technical Skills\nLanguages: C++, Python\nExperience\nAcme");
        assert_eq!(skills, ["C++", "Python"]);
    }

    #[test]
    fn test_bullet_lines_split_on_common_delimiters() {
        let skills = interpret("Skills\n• Rust, Go\n- Docker; Kubernetes\n* SQL | NoSQL");
        assert_eq!(skills, ["Rust", "Go", "Docker", "Kubernetes", "SQL", "NoSQL"]);
    }

    #[test]
    fn test_numbered_lines_strip_marker() {
        let skills = interpret("Skills\n1. Python\n2. Java");
        assert_eq!(skills, ["Python", "Java"]);
    }

    #[test]
    fn test_encounter_order_and_duplicates_preserved() {
        let skills = interpret("Skills\nRust, Python\nTools: Git, Rust");
        assert_eq!(skills, ["Rust", "Python", "Git", "Rust"]);
    }

    #[test]
    fn test_no_case_normalization() {
        let skills = interpret("Skills\nPyTorch, gRPC");
        assert_eq!(skills, ["PyTorch", "gRPC"]);
    }

    #[test]
    fn test_no_skills_section_appends_nothing() {
        assert!(interpret("Education\nState University").is_empty());
    }
}
