//! Pipeline – ties together document building, layout, pagination, and
//! rendering into a single function call.

use crate::document::build_document;
use crate::fonts::FontManager;
use crate::layout::compute_layout;
use crate::layout_config::LayoutConfig;
use crate::model::Resume;
use crate::pagination::paginate;
use crate::profile::TemplateId;
use crate::render::render_pdf;

/// Configuration for the rendering pipeline. The page margin comes from the
/// template profile, not from here.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Document title embedded in the PDF metadata (default: "resume").
    pub title: String,
    /// Page width in points (default: A4 = 595.28).
    pub page_width: f32,
    /// Page height in points (default: A4 = 841.89).
    pub page_height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "resume".to_string(),
            page_width: 595.28,
            page_height: 841.89,
        }
    }
}

/// Full pipeline: resume + template → PDF bytes.
///
/// Returns `(pdf_bytes, layout_config)`. Pure with respect to the resume;
/// rendering the same inputs twice yields the same layout.
pub fn render_resume(
    resume: &Resume,
    template: TemplateId,
    config: &RenderConfig,
) -> Result<(Vec<u8>, LayoutConfig), String> {
    let mut layout_config = compute_layout_config(resume, template, config);
    layout_config.title = config.title.clone();

    let pdf_bytes = render_pdf(&layout_config)?;
    log::debug!(
        "Rendered {} page(s) under template '{}' ({} bytes)",
        layout_config.pages.len(),
        template,
        pdf_bytes.len()
    );

    Ok((pdf_bytes, layout_config))
}

/// Convenience: render with the default A4 config.
pub fn render_resume_pdf(resume: &Resume, template: TemplateId) -> Result<Vec<u8>, String> {
    let (bytes, _) = render_resume(resume, template, &RenderConfig::default())?;
    Ok(bytes)
}

/// Generate only the layout config (no PDF rendering) – useful for testing
/// and for non-PDF rendering surfaces.
pub fn compute_layout_config(
    resume: &Resume,
    template: TemplateId,
    config: &RenderConfig,
) -> LayoutConfig {
    let profile = template.profile();
    let fonts = FontManager::default();

    let doc = build_document(resume, profile);
    let boxes = compute_layout(
        &doc,
        config.page_width,
        profile.page_margin,
        profile.font_family,
        &fonts,
    );
    paginate(
        &boxes,
        config.page_width,
        config.page_height,
        profile.page_margin,
        profile.font_family,
        &fonts,
    )
}
