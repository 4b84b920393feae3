//! Integration tests for the resume-forge pipeline.
//!
//! These tests validate:
//! - The editing session produces the states the preview renders
//! - Layout configs keep every box inside the page
//! - PDF output exists and has valid format for every template
//! - Section inclusion and pagination behave as specified

use resume_forge::editor::{Field, ListSection, PersonalField, ResumeStore};
use resume_forge::layout_config::{LayoutBox, LayoutConfig};
use resume_forge::model::{Experience, Resume};
use resume_forge::pipeline::{compute_layout_config, render_resume, RenderConfig};
use resume_forge::profile::TemplateId;
use resume_forge::render::render_pdf;
use resume_forge::samples;

// =====================================================================
// Helpers
// =====================================================================

fn default_config() -> RenderConfig {
    RenderConfig::default()
}

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 100, "PDF too small: {} bytes", bytes.len());
    assert_eq!(&bytes[0..5], b"%PDF-", "Missing PDF header");
}

fn visit_box(lbox: &LayoutBox, f: &mut dyn FnMut(&LayoutBox)) {
    f(lbox);
    for child in &lbox.children {
        visit_box(child, f);
    }
}

/// All non-empty text lines of a layout config, in document order.
fn text_lines(config: &LayoutConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &config.pages {
        for lbox in &page.boxes {
            visit_box(lbox, &mut |b| {
                if let Some(text) = &b.text {
                    for line in &text.lines {
                        if !line.text.trim().is_empty() {
                            lines.push(line.text.clone());
                        }
                    }
                }
            });
        }
    }
    lines
}

// =====================================================================
// Editing session → rendered preview
// =====================================================================

#[test]
fn edited_store_renders_its_current_state() {
    let mut store = ResumeStore::new();
    store.set_field(Field::Personal(PersonalField::Name), "Ada Lovelace");
    store.set_field(Field::Skill(0), "Rust");
    store.select_template(TemplateId::Modern);

    let config = compute_layout_config(store.resume(), store.template(), &default_config());
    let lines = text_lines(&config);
    assert!(lines.contains(&"Ada Lovelace".to_string()));
    assert!(lines.contains(&"Rust".to_string()));
}

#[test]
fn emptied_sections_disappear_from_the_preview() {
    let mut store = ResumeStore::new();
    // The fresh session seeds one blank entry per list; empty them all out.
    for section in [
        ListSection::Education,
        ListSection::Experience,
        ListSection::Skills,
        ListSection::Certifications,
        ListSection::Awards,
        ListSection::Languages,
    ] {
        store.remove_item(section, 0);
    }

    let config = compute_layout_config(store.resume(), store.template(), &default_config());
    let lines = text_lines(&config);
    // Only the header survives, and with blank contact fields its one
    // non-empty line is the "email • phone" separator.
    assert_eq!(lines, vec!["\u{2022}".to_string()]);
}

// =====================================================================
// Section inclusion
// =====================================================================

#[test]
fn empty_certifications_omit_the_section_title() {
    let mut resume = samples::sample_resume();
    resume.certifications.clear();

    let config = compute_layout_config(&resume, TemplateId::Classic, &default_config());
    let lines = text_lines(&config);
    assert!(!lines.iter().any(|l| l.eq_ignore_ascii_case("certifications")));
}

#[test]
fn one_certification_renders_exactly_two_lines() {
    let mut resume = Resume::default();
    resume.certifications.push(resume_forge::model::Certification {
        name: "AWS".into(),
        issuer: "Amazon".into(),
        year: "2023".into(),
        expiry: String::new(),
    });

    let config = compute_layout_config(&resume, TemplateId::Classic, &default_config());
    let lines = text_lines(&config);
    assert!(lines.contains(&"AWS \u{2013} 2023".to_string()));
    assert!(lines.contains(&"Amazon".to_string()));
}

#[test]
fn header_renders_for_a_blank_resume() {
    let resume = Resume::default();
    let (bytes, config) = render_resume(&resume, TemplateId::Minimal, &default_config()).unwrap();
    assert_valid_pdf(&bytes);
    assert_eq!(config.pages.len(), 1);
}

// =====================================================================
// Template independence
// =====================================================================

#[test]
fn templates_differ_only_in_style() {
    let resume = samples::sample_resume();
    // Wrap points depend on each template's margins, so compare the flowed
    // word stream rather than individual lines. Uppercase section titles
    // are a style treatment, hence the lowercasing.
    let texts: Vec<String> = TemplateId::ALL
        .iter()
        .map(|id| {
            text_lines(&compute_layout_config(&resume, *id, &default_config()))
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .collect();
    assert_eq!(texts[0], texts[1]);
    assert_eq!(texts[1], texts[2]);
}

#[test]
fn template_margins_shift_the_content_origin() {
    let resume = samples::sample_resume();
    for id in TemplateId::ALL {
        let config = compute_layout_config(&resume, id, &default_config());
        let margin = id.profile().page_margin;
        let first = &config.pages[0].boxes[0];
        assert!(
            (first.x - margin).abs() < 0.01,
            "Template {id}: first box at x={}, expected margin {margin}",
            first.x
        );
    }
}

// =====================================================================
// Layout config position tests
// =====================================================================

#[test]
fn layout_positions_are_within_page() {
    let config = compute_layout_config(
        &samples::sample_resume(),
        TemplateId::Modern,
        &default_config(),
    );
    for page in &config.pages {
        for lbox in &page.boxes {
            assert!(
                lbox.x >= 0.0 && lbox.x < config.page_width_pt,
                "Box x={} outside page width={}",
                lbox.x,
                config.page_width_pt
            );
            assert!(
                lbox.y >= 0.0 && lbox.y < config.page_height_pt,
                "Box y={} outside page height={}",
                lbox.y,
                config.page_height_pt
            );
        }
    }
}

#[test]
fn layout_boxes_have_positive_dimensions() {
    let config = compute_layout_config(
        &samples::sample_resume(),
        TemplateId::Classic,
        &default_config(),
    );
    for page in &config.pages {
        for lbox in &page.boxes {
            assert!(lbox.width >= 0.0, "Negative width: {}", lbox.width);
            assert!(lbox.height >= 0.0, "Negative height: {}", lbox.height);
        }
    }
}

// =====================================================================
// Pagination
// =====================================================================

#[test]
fn sample_resume_fits_one_page() {
    let config = compute_layout_config(
        &samples::sample_resume(),
        TemplateId::Classic,
        &default_config(),
    );
    assert_eq!(config.pages.len(), 1);
}

#[test]
fn long_resume_creates_multiple_pages() {
    let mut resume = samples::sample_resume();
    for i in 0..25 {
        resume.experience.push(Experience {
            company: format!("Company {i}"),
            position: "Senior Engineer".into(),
            duration: format!("{} \u{2013} {}", 1990 + i, 1991 + i),
            description: "Led a team through several large migrations and delivered \
                          measurable improvements to reliability and cost."
                .into(),
            achievements: vec!["Did the work".into()],
        });
    }

    let config = compute_layout_config(&resume, TemplateId::Minimal, &default_config());
    assert!(
        config.pages.len() > 1,
        "Expected multiple pages, got {}",
        config.pages.len()
    );
    // Nothing is clipped: every experience entry still appears.
    let lines = text_lines(&config);
    assert!(lines.contains(&"Company 24".to_string()));
}

// =====================================================================
// PDF generation
// =====================================================================

#[test]
fn all_templates_render_valid_pdfs() {
    let resume = samples::sample_resume();
    for id in TemplateId::ALL {
        let result = render_resume(&resume, id, &default_config());
        assert!(result.is_ok(), "Template '{id}' failed: {:?}", result.err());
        let (bytes, config) = result.unwrap();
        assert_valid_pdf(&bytes);
        assert!(!config.pages.is_empty());
    }
}

#[test]
fn header_only_resume_renders() {
    let (bytes, _) = render_resume(
        &samples::header_only_resume(),
        TemplateId::Classic,
        &default_config(),
    )
    .unwrap();
    assert_valid_pdf(&bytes);
}

// =====================================================================
// Layout config JSON round-trip
// =====================================================================

#[test]
fn layout_config_json_roundtrip() {
    let config = compute_layout_config(
        &samples::sample_resume(),
        TemplateId::Modern,
        &default_config(),
    );
    let json = config.to_json();
    let parsed = LayoutConfig::from_json(&json).unwrap();
    assert_eq!(config.pages.len(), parsed.pages.len());
    assert!((config.page_width_pt - parsed.page_width_pt).abs() < 0.01);
    assert_eq!(text_lines(&config), text_lines(&parsed));
}

#[test]
fn render_from_layout_config_json() {
    let config = compute_layout_config(
        &samples::sample_resume(),
        TemplateId::Classic,
        &default_config(),
    );
    let json = config.to_json();
    let parsed = LayoutConfig::from_json(&json).unwrap();
    let bytes = render_pdf(&parsed).unwrap();
    assert_valid_pdf(&bytes);
}

// =====================================================================
// Determinism
// =====================================================================

#[test]
fn layout_is_deterministic() {
    let resume = samples::sample_resume();
    let a = compute_layout_config(&resume, TemplateId::Modern, &default_config());
    let b = compute_layout_config(&resume, TemplateId::Modern, &default_config());
    assert_eq!(a.to_json(), b.to_json());
}

#[test]
fn pdf_output_is_stable_in_size() {
    let resume = samples::sample_resume();
    let (bytes1, _) = render_resume(&resume, TemplateId::Classic, &default_config()).unwrap();
    let (bytes2, _) = render_resume(&resume, TemplateId::Classic, &default_config()).unwrap();

    // printpdf embeds timestamps, so byte-exact equality isn't guaranteed.
    // Instead, check that the sizes are within a small tolerance.
    let diff = (bytes1.len() as i64 - bytes2.len() as i64).unsigned_abs();
    assert!(
        diff < 200,
        "PDF outputs differ significantly: {} vs {} bytes",
        bytes1.len(),
        bytes2.len()
    );
}
