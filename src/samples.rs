//! Sample resumes for testing and demonstration.

use crate::model::{
    Award, Certification, Education, Experience, Language, PersonalInfo, Proficiency, Resume,
};

/// A filled-in resume exercising every section.
pub fn sample_resume() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engine".to_string(),
            phone: "+44 20 7946 0001".to_string(),
            location: "London, UK".to_string(),
            portfolio: "https://ada.example".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
        },
        summary: "Mathematician and programmer with a decade of experience \
                  turning analytical engines into working software."
            .to_string(),
        education: vec![Education {
            school: "University of London".to_string(),
            degree: "MSc Mathematics".to_string(),
            year: "1840".to_string(),
            gpa: "4.0".to_string(),
            courses: vec!["Number theory".to_string(), "Mechanics".to_string()],
        }],
        experience: vec![
            Experience {
                company: "Analytical Engines Ltd".to_string(),
                position: "Lead Programmer".to_string(),
                duration: "1842 \u{2013} 1852".to_string(),
                description: "Designed and documented the first published algorithm \
                              intended for execution on a general-purpose computer."
                    .to_string(),
                achievements: vec![
                    "Published the Bernoulli number program".to_string(),
                    "Introduced looping constructs".to_string(),
                ],
            },
            Experience {
                company: "Royal Society".to_string(),
                position: "Research Fellow".to_string(),
                duration: "1838 \u{2013} 1842".to_string(),
                description: "Translated and annotated foundational computing papers."
                    .to_string(),
                achievements: Vec::new(),
            },
        ],
        skills: vec![
            "Algorithms".to_string(),
            "Punched cards".to_string(),
            "Mathematics".to_string(),
            "Technical writing".to_string(),
        ],
        certifications: vec![Certification {
            name: "AWS".to_string(),
            issuer: "Amazon".to_string(),
            year: "2023".to_string(),
            expiry: "2026".to_string(),
        }],
        awards: vec![Award {
            title: "Pioneer of Computing".to_string(),
            issuer: "Computer History Society".to_string(),
            year: "1852".to_string(),
            description: "For the first published computer program.".to_string(),
        }],
        languages: vec![
            Language {
                name: "English".to_string(),
                proficiency: Proficiency::Native,
            },
            Language {
                name: "French".to_string(),
                proficiency: Proficiency::Fluent,
            },
        ],
    }
}

/// A resume with only the header filled in; every list is empty, so only
/// the header section renders.
pub fn header_only_resume() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Arlington, VA".to_string(),
            portfolio: String::new(),
            linkedin: String::new(),
        },
        ..Resume::default()
    }
}
