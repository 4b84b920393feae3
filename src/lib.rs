//! # resume-forge – form state and template-driven resume rendering
//!
//! This crate provides the core of a resume builder: a canonical data model,
//! a single-writer form state store, a fixed registry of visual template
//! profiles, and a pure pipeline that renders the model into a paginated
//! document. The pipeline stages are:
//!
//! 1. **Build** – resume + template profile → semantic styled tree ([`document`])
//! 2. **Layout** – flow layout with measured text ([`layout`])
//! 3. **Paginate** – split into A4 pages ([`pagination`])
//! 4. **Render** – emit PDF bytes via printpdf ([`render`])
//!
//! Editing goes through [`editor::ResumeStore`], the only sanctioned
//! mutation surface; rendering never writes back into the model.

pub mod document;
pub mod editor;
pub mod fonts;
pub mod layout;
pub mod layout_config;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod profile;
pub mod render;
pub mod samples;
pub mod style;

// Re-exports for convenience
pub use editor::ResumeStore;
pub use model::Resume;
pub use pipeline::{render_resume, render_resume_pdf, RenderConfig};
pub use profile::TemplateId;
