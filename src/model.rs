//! Resume data model – the canonical schema filled in by the form layer and
//! consumed by the document builder.
//!
//! Optional text fields are represented as empty strings rather than
//! `Option<String>`: every entry carries all of its keys from the moment it
//! is created, which keeps the editor total and the serialized form stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: String,
    pub gpa: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub expiry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub description: String,
}

/// Self-assessed command of a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    #[default]
    Professional,
    Intermediate,
    Basic,
}

impl Proficiency {
    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Professional => "Professional",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Native" => Ok(Proficiency::Native),
            "Fluent" => Ok(Proficiency::Fluent),
            "Professional" => Ok(Proficiency::Professional),
            "Intermediate" => Ok(Proficiency::Intermediate),
            "Basic" => Ok(Proficiency::Basic),
            other => Err(format!("Unknown proficiency: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

/// The root aggregate holding all user-entered resume data.
///
/// `skills` holds bare strings; every other list holds field records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
    pub languages: Vec<Language>,
}

impl Resume {
    /// The session's starting state: all scalar fields empty and every list
    /// seeded with exactly one blank entry (skills with one empty string).
    pub fn initial() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            education: vec![Education::default()],
            experience: vec![Experience::default()],
            skills: vec![String::new()],
            certifications: vec![Certification::default()],
            awards: vec![Award::default()],
            languages: vec![Language::default()],
        }
    }
}
