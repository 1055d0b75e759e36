//! The extraction pipeline: independent section interpreters that each scan
//! the full document text and populate one shared [`CvRecord`].

mod dates;
mod education;
mod experience;
mod personal;
mod scanner;
mod section;
mod skills;

use tracing::warn;

use crate::models::record::CvRecord;
use self::education::EducationInterpreter;
use self::experience::ExperienceInterpreter;
use self::personal::PersonalInfoInterpreter;
use self::skills::SkillsInterpreter;

/// Owns one instance of each interpreter, constructed once and reused across
/// documents. The set is closed and known at compile time, so there is no
/// interpreter trait; each pass is a plain struct with an `apply` operation.
///
/// Pattern sets compile at construction. A set that fails to compile disables
/// only its interpreter (logged below) — the remaining passes still run and
/// the pipeline still returns a fully-initialized record.
///
/// An `Extractor` holds no per-call state: one instance may be shared
/// immutably and reused sequentially or behind an `Arc`, with each caller
/// extracting into its own record.
pub struct Extractor {
    personal: Option<PersonalInfoInterpreter>,
    education: Option<EducationInterpreter>,
    skills: Option<SkillsInterpreter>,
    experience: Option<ExperienceInterpreter>,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            personal: enabled("personal info", PersonalInfoInterpreter::new()),
            education: enabled("education", EducationInterpreter::new()),
            skills: enabled("skills", SkillsInterpreter::new()),
            experience: enabled("experience", ExperienceInterpreter::new()),
        }
    }

    /// Runs every interpreter once, in fixed order, over the same text.
    /// Never fails: missing sections and unusable tokens leave the
    /// corresponding fields at their defaults.
    pub fn extract(&self, text: &str) -> CvRecord {
        let mut record = CvRecord::default();
        if let Some(interpreter) = &self.personal {
            interpreter.apply(text, &mut record);
        }
        if let Some(interpreter) = &self.education {
            interpreter.apply(text, &mut record);
        }
        if let Some(interpreter) = &self.skills {
            interpreter.apply(text, &mut record);
        }
        if let Some(interpreter) = &self.experience {
            interpreter.apply(text, &mut record);
        }
        record
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

fn enabled<T>(name: &str, built: Result<T, regex::Error>) -> Option<T> {
    match built {
        Ok(interpreter) => Some(interpreter),
        Err(e) => {
            warn!("{name} interpreter disabled, pattern failed to compile: {e}");
            None
        }
    }
}
