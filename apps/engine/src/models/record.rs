use std::collections::BTreeMap;

use serde::Serialize;

/// The aggregate structured result of interpreting one document.
///
/// A record always exists fully default-initialized before any interpreter
/// runs. Interpreters mutate it only through the setters below, which encode
/// the write policy per field: contact fields and the name are first-match
/// wins, the about and education fields are overwritten wholesale, skills are
/// append-only, and experience entries are last-write-wins per label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvRecord {
    name: String,
    surname: String,
    email: Option<String>,
    linkedin: Option<String>,
    github: Option<String>,
    about: String,
    education: String,
    skills: Vec<String>,
    experience: BTreeMap<String, i32>,
}

impl CvRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.linkedin.as_deref()
    }

    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience(&self) -> &BTreeMap<String, i32> {
        &self.experience
    }

    /// Sets name and surname together. First match wins; later candidates are
    /// ignored.
    pub fn set_name(&mut self, name: impl Into<String>, surname: impl Into<String>) {
        if self.name.is_empty() {
            self.name = name.into();
            self.surname = surname.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.email.is_none() {
            self.email = Some(email.into());
        }
    }

    pub fn set_linkedin(&mut self, url: impl Into<String>) {
        if self.linkedin.is_none() {
            self.linkedin = Some(url.into());
        }
    }

    pub fn set_github(&mut self, url: impl Into<String>) {
        if self.github.is_none() {
            self.github = Some(url.into());
        }
    }

    pub fn set_about(&mut self, about: impl Into<String>) {
        self.about = about.into();
    }

    pub fn set_education(&mut self, education: impl Into<String>) {
        self.education = education.into();
    }

    pub fn add_skill(&mut self, skill: impl Into<String>) {
        self.skills.push(skill.into());
    }

    pub fn add_experience(&mut self, label: impl Into<String>, months: i32) {
        self.experience.insert(label.into(), months);
    }
}

/// Wire shape of a record inside the success envelope. Field names and types
/// are fixed for compatibility with existing consumers: absent contact fields
/// serialize as empty strings, experience as a label -> months object.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPayload {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub about: String,
    pub education: String,
    pub skills: Vec<String>,
    pub experience: BTreeMap<String, i32>,
}

impl From<&CvRecord> for RecordPayload {
    fn from(record: &CvRecord) -> Self {
        RecordPayload {
            name: record.name().to_string(),
            surname: record.surname().to_string(),
            email: record.email().unwrap_or_default().to_string(),
            linkedin: record.linkedin().unwrap_or_default().to_string(),
            github: record.github().unwrap_or_default().to_string(),
            about: record.about().to_string(),
            education: record.education().to_string(),
            skills: record.skills().to_vec(),
            experience: record.experience().clone(),
        }
    }
}
