//! Form state store – owns the single live [`Resume`] and the active
//! [`TemplateId`], and provides the only sanctioned mutation surface.
//!
//! Every operation is total: an out-of-range index or an unparseable
//! proficiency value degrades to a silent no-op instead of an error, since
//! the form layer never offers invalid references. Effective mutations bump
//! a revision counter so the preview layer can detect changes cheaply.

use std::str::FromStr;

use crate::model::{Award, Certification, Education, Experience, Language, Proficiency, Resume};
use crate::profile::TemplateId;

/// One editable text field of [`PersonalInfo`].
///
/// [`PersonalInfo`]: crate::model::PersonalInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Portfolio,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Year,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationField {
    Name,
    Issuer,
    Year,
    Expiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardField {
    Title,
    Issuer,
    Year,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageField {
    Name,
    Proficiency,
}

/// Addresses one editable text slot anywhere in the resume.
///
/// Replaces the string-keyed section dispatch of a dynamic form layer with
/// enum-keyed dispatch: each variant carries its own strongly typed field
/// set, so "is this section a list, a record, or a scalar" is decided at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Personal(PersonalField),
    Summary,
    Education(usize, EducationField),
    Experience(usize, ExperienceField),
    /// Skills hold bare strings, so the index alone addresses the slot.
    Skill(usize),
    Certification(usize, CertificationField),
    Award(usize, AwardField),
    Language(usize, LanguageField),
}

/// One of the resume's multi-entry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    Education,
    Experience,
    Skills,
    Certifications,
    Awards,
    Languages,
}

/// The single-writer state container behind the form.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    resume: Resume,
    template: TemplateId,
    revision: u64,
}

impl ResumeStore {
    /// A fresh editing session: seeded blank resume, classic template.
    pub fn new() -> Self {
        Self {
            resume: Resume::initial(),
            template: TemplateId::default(),
            revision: 0,
        }
    }

    /// Start a session from existing data (e.g. a loaded JSON document).
    pub fn with_resume(resume: Resume) -> Self {
        Self {
            resume,
            template: TemplateId::default(),
            revision: 0,
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Monotonic counter, bumped once per effective mutation. No-ops leave
    /// it untouched, so equal revisions imply an unchanged document.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the text at `field` with `value`.
    ///
    /// Out-of-range indices are no-ops. Setting a language proficiency
    /// parses `value` against the fixed proficiency set and ignores
    /// anything else.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let changed = match field {
            Field::Personal(f) => {
                let p = &mut self.resume.personal_info;
                let slot = match f {
                    PersonalField::Name => &mut p.name,
                    PersonalField::Email => &mut p.email,
                    PersonalField::Phone => &mut p.phone,
                    PersonalField::Location => &mut p.location,
                    PersonalField::Portfolio => &mut p.portfolio,
                    PersonalField::Linkedin => &mut p.linkedin,
                };
                assign(slot, value)
            }
            Field::Summary => assign(&mut self.resume.summary, value),
            Field::Education(index, f) => match self.resume.education.get_mut(index) {
                Some(entry) => {
                    let slot = match f {
                        EducationField::School => &mut entry.school,
                        EducationField::Degree => &mut entry.degree,
                        EducationField::Year => &mut entry.year,
                        EducationField::Gpa => &mut entry.gpa,
                    };
                    assign(slot, value)
                }
                None => false,
            },
            Field::Experience(index, f) => match self.resume.experience.get_mut(index) {
                Some(entry) => {
                    let slot = match f {
                        ExperienceField::Company => &mut entry.company,
                        ExperienceField::Position => &mut entry.position,
                        ExperienceField::Duration => &mut entry.duration,
                        ExperienceField::Description => &mut entry.description,
                    };
                    assign(slot, value)
                }
                None => false,
            },
            Field::Skill(index) => match self.resume.skills.get_mut(index) {
                Some(slot) => assign(slot, value),
                None => false,
            },
            Field::Certification(index, f) => match self.resume.certifications.get_mut(index) {
                Some(entry) => {
                    let slot = match f {
                        CertificationField::Name => &mut entry.name,
                        CertificationField::Issuer => &mut entry.issuer,
                        CertificationField::Year => &mut entry.year,
                        CertificationField::Expiry => &mut entry.expiry,
                    };
                    assign(slot, value)
                }
                None => false,
            },
            Field::Award(index, f) => match self.resume.awards.get_mut(index) {
                Some(entry) => {
                    let slot = match f {
                        AwardField::Title => &mut entry.title,
                        AwardField::Issuer => &mut entry.issuer,
                        AwardField::Year => &mut entry.year,
                        AwardField::Description => &mut entry.description,
                    };
                    assign(slot, value)
                }
                None => false,
            },
            Field::Language(index, f) => match self.resume.languages.get_mut(index) {
                Some(entry) => match f {
                    LanguageField::Name => assign(&mut entry.name, value),
                    LanguageField::Proficiency => match Proficiency::from_str(value) {
                        Ok(p) if p != entry.proficiency => {
                            entry.proficiency = p;
                            true
                        }
                        Ok(_) => false,
                        Err(_) => {
                            log::debug!("Ignoring unknown proficiency value {value:?}");
                            false
                        }
                    },
                },
                None => false,
            },
        };
        if changed {
            self.revision += 1;
        }
    }

    /// Append one blank entry to the named list. The blank shape depends on
    /// the section: skills get an empty string, languages a blank name with
    /// the default proficiency, record lists an entry with all fields empty.
    pub fn add_item(&mut self, section: ListSection) {
        match section {
            ListSection::Education => self.resume.education.push(Education::default()),
            ListSection::Experience => self.resume.experience.push(Experience::default()),
            ListSection::Skills => self.resume.skills.push(String::new()),
            ListSection::Certifications => {
                self.resume.certifications.push(Certification::default())
            }
            ListSection::Awards => self.resume.awards.push(Award::default()),
            ListSection::Languages => self.resume.languages.push(Language::default()),
        }
        self.revision += 1;
    }

    /// Remove the entry at `index` from the named list, shifting subsequent
    /// entries down. Out-of-range indices are no-ops; removing the last
    /// remaining entry is allowed (lists may become empty).
    pub fn remove_item(&mut self, section: ListSection, index: usize) {
        let removed = match section {
            ListSection::Education => remove_at(&mut self.resume.education, index),
            ListSection::Experience => remove_at(&mut self.resume.experience, index),
            ListSection::Skills => remove_at(&mut self.resume.skills, index),
            ListSection::Certifications => remove_at(&mut self.resume.certifications, index),
            ListSection::Awards => remove_at(&mut self.resume.awards, index),
            ListSection::Languages => remove_at(&mut self.resume.languages, index),
        };
        if removed {
            self.revision += 1;
        }
    }

    /// Switch the active template profile.
    pub fn select_template(&mut self, template: TemplateId) {
        if self.template != template {
            self.template = template;
            self.revision += 1;
        }
    }
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn assign(slot: &mut String, value: &str) -> bool {
    if slot == value {
        return false;
    }
    slot.clear();
    slot.push_str(value);
    true
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_matches_initial_state() {
        let store = ResumeStore::new();
        assert_eq!(store.resume(), &Resume::initial());
        assert_eq!(store.template(), TemplateId::Classic);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn scalar_edit_changes_only_that_field() {
        let mut store = ResumeStore::new();
        store.set_field(Field::Personal(PersonalField::Email), "a@b.com");

        let mut expected = Resume::initial();
        expected.personal_info.email = "a@b.com".to_string();
        assert_eq!(store.resume(), &expected);
        assert_eq!(store.template(), TemplateId::Classic);
    }

    #[test]
    fn summary_edit_sets_the_string_directly() {
        let mut store = ResumeStore::new();
        store.set_field(Field::Summary, "Ten years of plumbing.");
        assert_eq!(store.resume().summary, "Ten years of plumbing.");
    }

    #[test]
    fn list_edit_leaves_sibling_entries_untouched() {
        let mut store = ResumeStore::new();
        store.add_item(ListSection::Education);
        store.set_field(Field::Education(0, EducationField::School), "MIT");
        store.set_field(Field::Education(1, EducationField::Degree), "BSc");

        let edu = &store.resume().education;
        assert_eq!(edu.len(), 2);
        assert_eq!(edu[0].school, "MIT");
        assert_eq!(edu[0].degree, "");
        assert_eq!(edu[1].school, "");
        assert_eq!(edu[1].degree, "BSc");
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut store = ResumeStore::new();
        let before = store.resume().experience.clone();
        store.add_item(ListSection::Experience);
        let new_index = store.resume().experience.len() - 1;
        store.remove_item(ListSection::Experience, new_index);
        assert_eq!(store.resume().experience, before);
    }

    #[test]
    fn removal_never_blocks_emptiness() {
        let mut store = ResumeStore::new();
        store.remove_item(ListSection::Skills, 0);
        assert!(store.resume().skills.is_empty());
        // Removing from an already-empty list stays a no-op.
        store.remove_item(ListSection::Skills, 0);
        assert!(store.resume().skills.is_empty());
    }

    #[test]
    fn out_of_range_removal_is_a_noop() {
        let mut store = ResumeStore::new();
        let before = store.revision();
        store.remove_item(ListSection::Awards, 99);
        assert_eq!(store.resume().awards.len(), 1);
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn out_of_range_edit_is_a_noop() {
        let mut store = ResumeStore::new();
        let before = store.resume().clone();
        store.set_field(Field::Certification(5, CertificationField::Name), "AWS");
        assert_eq!(store.resume(), &before);
    }

    #[test]
    fn skill_edit_replaces_the_bare_string() {
        let mut store = ResumeStore::new();
        store.set_field(Field::Skill(0), "Rust");
        assert_eq!(store.resume().skills, vec!["Rust"]);
    }

    #[test]
    fn proficiency_edit_parses_the_fixed_set() {
        let mut store = ResumeStore::new();
        store.set_field(Field::Language(0, LanguageField::Proficiency), "Fluent");
        assert_eq!(
            store.resume().languages[0].proficiency,
            Proficiency::Fluent
        );

        let rev = store.revision();
        store.set_field(Field::Language(0, LanguageField::Proficiency), "Okayish");
        assert_eq!(
            store.resume().languages[0].proficiency,
            Proficiency::Fluent
        );
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn new_language_entries_default_to_professional() {
        let mut store = ResumeStore::new();
        store.add_item(ListSection::Languages);
        assert_eq!(
            store.resume().languages[1].proficiency,
            Proficiency::Professional
        );
    }

    #[test]
    fn effective_edits_bump_the_revision() {
        let mut store = ResumeStore::new();
        store.set_field(Field::Personal(PersonalField::Name), "Ada");
        assert_eq!(store.revision(), 1);
        // Writing the same value again changes nothing.
        store.set_field(Field::Personal(PersonalField::Name), "Ada");
        assert_eq!(store.revision(), 1);
        store.select_template(TemplateId::Modern);
        assert_eq!(store.revision(), 2);
        store.select_template(TemplateId::Modern);
        assert_eq!(store.revision(), 2);
    }
}
