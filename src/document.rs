//! Document builder – pure mapping from a [`Resume`] and a
//! [`TemplateProfile`] to a semantic tree of styled nodes.
//!
//! Section inclusion lives here: the header always renders, the summary only
//! when non-empty, and each list section only when its list is non-empty
//! (title omitted with the section). Every visual constant comes from the
//! profile; the builder holds only text shaping and ordering.

use crate::model::Resume;
use crate::profile::TemplateProfile;
use crate::style::{ChipStyle, Color, TextAlign, TextStyle};

/// A styled node of the semantic document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    /// A group the paginator keeps on one page when it fits (one entry, or
    /// the header). `spacing_after` is in points.
    Block {
        children: Vec<DocNode>,
        spacing_after: f32,
    },
    Paragraph {
        text: String,
        style: TextStyle,
        align: TextAlign,
        spacing_after: f32,
    },
    /// One line with left- and right-aligned halves (company / duration).
    SplitLine {
        left: String,
        left_style: TextStyle,
        right: String,
        right_style: TextStyle,
        spacing_after: f32,
    },
    /// A wrapped row of chip-styled tokens, one per skill.
    ChipRow {
        chips: Vec<String>,
        style: ChipStyle,
        spacing_after: f32,
    },
    /// A horizontal divider rule spanning the content width.
    Rule {
        thickness: f32,
        color: Color,
        spacing_after: f32,
    },
}

/// Build the semantic document for a resume under one template profile.
///
/// Pure and deterministic; never mutates the resume. Top-level nodes are the
/// units the paginator moves between pages.
pub fn build_document(resume: &Resume, profile: &TemplateProfile) -> Vec<DocNode> {
    let mut nodes = Vec::new();

    nodes.push(header(resume, profile));

    if !resume.summary.is_empty() {
        let mut section = vec![
            section_title("Professional Summary", profile),
            paragraph(&resume.summary, profile.body, 0.0),
        ];
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.experience.is_empty() {
        let mut section = vec![section_title("Professional Experience", profile)];
        for exp in &resume.experience {
            let mut children = vec![
                DocNode::SplitLine {
                    left: exp.company.clone(),
                    left_style: profile.company,
                    right: exp.duration.clone(),
                    right_style: profile.duration,
                    spacing_after: profile.company_spacing,
                },
                paragraph(&exp.position, profile.position, profile.position_spacing),
                paragraph(&exp.description, profile.body, 0.0),
            ];
            for achievement in &exp.achievements {
                children.push(paragraph(
                    &format!("\u{2022} {achievement}"),
                    profile.body,
                    0.0,
                ));
            }
            section.push(DocNode::Block {
                children,
                spacing_after: profile.entry_spacing.experience,
            });
        }
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.education.is_empty() {
        let mut section = vec![section_title("Education", profile)];
        for edu in &resume.education {
            // gpa and courses are captured in the model but not rendered.
            section.push(DocNode::Block {
                children: vec![
                    paragraph(&edu.school, profile.company, 0.0),
                    paragraph(&edu.degree, profile.position, profile.position_spacing),
                    paragraph(&edu.year, profile.duration, 0.0),
                ],
                spacing_after: profile.entry_spacing.education,
            });
        }
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.skills.is_empty() {
        let mut section = vec![
            section_title("Skills", profile),
            DocNode::ChipRow {
                chips: resume.skills.clone(),
                style: profile.chip,
                spacing_after: 0.0,
            },
        ];
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.certifications.is_empty() {
        let mut section = vec![section_title("Certifications", profile)];
        for cert in &resume.certifications {
            section.push(DocNode::Block {
                children: vec![
                    paragraph(
                        &format!("{} \u{2013} {}", cert.name, cert.year),
                        profile.position,
                        0.0,
                    ),
                    paragraph(&cert.issuer, profile.position, 0.0),
                ],
                spacing_after: profile.entry_spacing.certification,
            });
        }
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.awards.is_empty() {
        let mut section = vec![section_title("Awards & Achievements", profile)];
        for award in &resume.awards {
            section.push(DocNode::Block {
                children: vec![
                    paragraph(
                        &format!("{} \u{2013} {}", award.title, award.year),
                        profile.position,
                        0.0,
                    ),
                    paragraph(&award.issuer, profile.position, 0.0),
                    paragraph(&award.description, profile.position, 0.0),
                ],
                spacing_after: profile.entry_spacing.award,
            });
        }
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    if !resume.languages.is_empty() {
        let mut section = vec![section_title("Languages", profile)];
        for lang in &resume.languages {
            section.push(paragraph(
                &format!("{} \u{2013} {}", lang.name, lang.proficiency),
                profile.position,
                profile.entry_spacing.language,
            ));
        }
        close_section(&mut section, profile);
        nodes.extend(section);
    }

    nodes
}

/// The header block: name, "email • phone", location, optional bottom rule.
/// Renders unconditionally, even when every field is still empty.
fn header(resume: &Resume, profile: &TemplateProfile) -> DocNode {
    let info = &resume.personal_info;
    let mut children = vec![
        DocNode::Paragraph {
            text: info.name.clone(),
            style: profile.name,
            align: profile.header_align,
            spacing_after: profile.name_spacing,
        },
        DocNode::Paragraph {
            text: format!("{} \u{2022} {}", info.email, info.phone),
            style: profile.contact,
            align: profile.header_align,
            spacing_after: profile.contact_spacing,
        },
        DocNode::Paragraph {
            text: info.location.clone(),
            style: profile.contact,
            align: profile.header_align,
            spacing_after: 0.0,
        },
    ];
    if let Some(divider) = profile.header_divider {
        if let Some(DocNode::Paragraph { spacing_after, .. }) = children.last_mut() {
            *spacing_after = divider.gap;
        }
        children.push(DocNode::Rule {
            thickness: divider.thickness,
            color: divider.color,
            spacing_after: 0.0,
        });
    }
    DocNode::Block {
        children,
        spacing_after: profile.header_spacing,
    }
}

/// Section title with the profile's uppercase / divider treatment.
fn section_title(title: &str, profile: &TemplateProfile) -> DocNode {
    let text = if profile.section_title_uppercase {
        title.to_uppercase()
    } else {
        title.to_string()
    };
    let mut children = vec![DocNode::Paragraph {
        text,
        style: profile.section_title,
        align: TextAlign::Left,
        spacing_after: profile
            .section_title_divider
            .map(|d| d.gap)
            .unwrap_or(0.0),
    }];
    if let Some(divider) = profile.section_title_divider {
        children.push(DocNode::Rule {
            thickness: divider.thickness,
            color: divider.color,
            spacing_after: 0.0,
        });
    }
    DocNode::Block {
        children,
        spacing_after: profile.section_title_spacing,
    }
}

fn paragraph(text: &str, style: TextStyle, spacing_after: f32) -> DocNode {
    DocNode::Paragraph {
        text: text.to_string(),
        style,
        align: TextAlign::Left,
        spacing_after,
    }
}

/// Stretch the gap after the section's last node to the section spacing.
fn close_section(section: &mut [DocNode], profile: &TemplateProfile) {
    if let Some(last) = section.last_mut() {
        let spacing = match last {
            DocNode::Block { spacing_after, .. }
            | DocNode::Paragraph { spacing_after, .. }
            | DocNode::SplitLine { spacing_after, .. }
            | DocNode::ChipRow { spacing_after, .. }
            | DocNode::Rule { spacing_after, .. } => spacing_after,
        };
        *spacing += profile.section_spacing;
    }
}

/// Flatten the tree into its visible text runs, in document order.
/// Chip rows contribute one entry per chip; rules contribute nothing.
pub fn plain_text(nodes: &[DocNode]) -> Vec<String> {
    let mut out = Vec::new();
    collect_text(nodes, &mut out);
    out
}

fn collect_text(nodes: &[DocNode], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            DocNode::Block { children, .. } => collect_text(children, out),
            DocNode::Paragraph { text, .. } => out.push(text.clone()),
            DocNode::SplitLine { left, right, .. } => {
                out.push(left.clone());
                out.push(right.clone());
            }
            DocNode::ChipRow { chips, .. } => out.extend(chips.iter().cloned()),
            DocNode::Rule { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Certification, Resume};
    use crate::profile::TemplateId;

    fn bare_resume() -> Resume {
        // Everything empty: no seeded entries, so only the header renders.
        Resume::default()
    }

    #[test]
    fn empty_lists_omit_their_sections() {
        let resume = bare_resume();
        let doc = build_document(&resume, TemplateId::Classic.profile());
        // Header block only.
        assert_eq!(doc.len(), 1);
        let text = plain_text(&doc);
        assert!(!text.iter().any(|t| t.contains("Certifications")));
        assert!(!text.iter().any(|t| t.contains("Skills")));
    }

    #[test]
    fn header_renders_even_when_empty() {
        let doc = build_document(&bare_resume(), TemplateId::Modern.profile());
        let text = plain_text(&doc);
        // name, contact line, location
        assert_eq!(text.len(), 3);
        assert_eq!(text[0], "");
        assert_eq!(text[1], " \u{2022} ");
    }

    #[test]
    fn certification_renders_two_lines() {
        let mut resume = bare_resume();
        resume.certifications.push(Certification {
            name: "AWS".into(),
            issuer: "Amazon".into(),
            year: "2023".into(),
            expiry: String::new(),
        });
        let doc = build_document(&resume, TemplateId::Minimal.profile());
        let text = plain_text(&doc);
        assert!(text.contains(&"AWS \u{2013} 2023".to_string()));
        assert!(text.contains(&"Amazon".to_string()));
    }

    #[test]
    fn summary_renders_only_when_non_empty() {
        let mut resume = bare_resume();
        let doc = build_document(&resume, TemplateId::Classic.profile());
        assert!(!plain_text(&doc)
            .iter()
            .any(|t| t.contains("Professional Summary")));

        resume.summary = "Seasoned engineer.".into();
        let doc = build_document(&resume, TemplateId::Classic.profile());
        let text = plain_text(&doc);
        assert!(text.contains(&"Professional Summary".to_string()));
        assert!(text.contains(&"Seasoned engineer.".to_string()));
    }

    #[test]
    fn section_titles_follow_profile_case() {
        let mut resume = bare_resume();
        resume.skills.push("Rust".into());

        let classic = plain_text(&build_document(&resume, TemplateId::Classic.profile()));
        assert!(classic.contains(&"Skills".to_string()));

        let modern = plain_text(&build_document(&resume, TemplateId::Modern.profile()));
        assert!(modern.contains(&"SKILLS".to_string()));
    }

    #[test]
    fn templates_agree_on_content_and_order() {
        let resume = crate::samples::sample_resume();
        let texts: Vec<Vec<String>> = TemplateId::ALL
            .iter()
            .map(|id| {
                plain_text(&build_document(&resume, id.profile()))
                    .iter()
                    .map(|t| t.to_lowercase())
                    .collect()
            })
            .collect();
        assert_eq!(texts[0], texts[1]);
        assert_eq!(texts[1], texts[2]);
    }

    #[test]
    fn empty_skill_still_occupies_a_chip() {
        let mut resume = bare_resume();
        resume.skills = vec!["Rust".into(), String::new()];
        let doc = build_document(&resume, TemplateId::Modern.profile());
        let chips = doc.iter().find_map(|n| match n {
            DocNode::ChipRow { chips, .. } => Some(chips.clone()),
            _ => None,
        });
        assert_eq!(chips.unwrap().len(), 2);
    }

    #[test]
    fn achievements_render_as_bullet_lines_in_order() {
        let mut resume = bare_resume();
        resume.experience.push(crate::model::Experience {
            company: "Acme".into(),
            position: "Engineer".into(),
            duration: "2020\u{2013}2024".into(),
            description: "Built things.".into(),
            achievements: vec!["Shipped v1".into(), "Cut costs".into()],
        });
        let doc = build_document(&resume, TemplateId::Classic.profile());
        let text = plain_text(&doc);
        let first = text.iter().position(|t| t == "\u{2022} Shipped v1").unwrap();
        let second = text.iter().position(|t| t == "\u{2022} Cut costs").unwrap();
        assert!(first < second);
    }
}
