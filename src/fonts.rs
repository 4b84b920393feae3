//! Font metrics and text measurement using `ttf-parser`.
//!
//! The renderer uses the PDF built-in Helvetica and Times families, so no
//! font bytes ship with the crate; widths fall back to proportional-font
//! heuristics unless a real TTF is loaded for tighter measurement.

use std::collections::HashMap;

use crate::style::FontFamily;

/// A loaded font face with metrics.
#[derive(Clone)]
pub struct FontData {
    /// Raw font bytes (kept alive for ttf-parser's zero-copy API).
    pub bytes: Vec<u8>,
    pub units_per_em: f32,
    pub ascender: f32,
    pub descender: f32,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FontKey {
    pub family: FontFamily,
    pub bold: bool,
}

/// Manages loaded fonts and answers measurement queries.
pub struct FontManager {
    fonts: HashMap<FontKey, FontData>,
}

impl FontManager {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Load a TTF/OTF font from bytes for precise measurement.
    pub fn load_font(&mut self, family: FontFamily, bold: bool, bytes: Vec<u8>) -> Result<(), String> {
        let face = ttf_parser::Face::parse(&bytes, 0)
            .map_err(|e| format!("Failed to parse font: {e}"))?;

        let data = FontData {
            units_per_em: face.units_per_em() as f32,
            ascender: face.ascender() as f32,
            descender: face.descender() as f32,
            bytes,
        };
        self.fonts.insert(FontKey { family, bold }, data);
        Ok(())
    }

    /// Measure the width of a string at a given font size, in points.
    ///
    /// With real font bytes loaded we sum glyph advances; otherwise an
    /// average character width heuristic (bold runs ~10 % wider, Times is
    /// slightly narrower than Helvetica).
    pub fn measure_text_width(
        &self,
        text: &str,
        font_size: f32,
        bold: bool,
        family: FontFamily,
    ) -> f32 {
        if let Some(data) = self.fonts.get(&FontKey { family, bold }) {
            if let Ok(face) = ttf_parser::Face::parse(&data.bytes, 0) {
                let scale = font_size / data.units_per_em;
                let mut width = 0.0f32;
                for ch in text.chars() {
                    if let Some(gid) = face.glyph_index(ch) {
                        let advance = face.glyph_hor_advance(gid).unwrap_or(0);
                        width += advance as f32 * scale;
                    } else {
                        width += font_size * 0.5;
                    }
                }
                return width;
            }
        }

        let avg = match (family, bold) {
            (FontFamily::Helvetica, false) => 0.5,
            (FontFamily::Helvetica, true) => 0.55,
            (FontFamily::Times, false) => 0.47,
            (FontFamily::Times, true) => 0.52,
        };
        text.chars().count() as f32 * font_size * avg
    }

    /// Line height in points for a font size and line-height factor.
    pub fn line_height_pt(&self, font_size: f32, line_height_factor: f32) -> f32 {
        font_size * line_height_factor
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Word-wrap text to fit within `max_width` points. Returns a vec of lines.
pub fn wrap_text(
    text: &str,
    font_size: f32,
    bold: bool,
    family: FontFamily,
    max_width: f32,
    fonts: &FontManager,
) -> Vec<String> {
    if max_width <= 0.0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    // Split on existing newlines first
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in &words {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            let w = fonts.measure_text_width(&candidate, font_size, bold, family);
            if w > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = candidate;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
