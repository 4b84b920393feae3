//! Visual attribute primitives shared by the template profiles and the
//! layout/render stages: colours, font weights, text styles, divider rules.

/// RGBA colour (0.0 – 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque colour from 8-bit channel values.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a < 0.001
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Self::rgb8(r, g, b))
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Self::rgb8(r, g, b))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Built-in font families available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    Times,
}

impl FontFamily {
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Times => "Times",
        }
    }
}

/// Fully resolved style for one run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Color,
    /// Multiplier over `font_size`.
    pub line_height: f32,
    /// Extra tracking between characters, in points.
    pub letter_spacing: f32,
}

impl TextStyle {
    pub const fn new(font_size: f32, weight: FontWeight, color: Color) -> Self {
        Self {
            font_size,
            weight,
            color,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }

    pub const fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub const fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

/// A horizontal divider rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub thickness: f32,
    pub color: Color,
    /// Gap between the content above and the rule, in points.
    pub gap: f32,
}

/// Style for one skill chip and the row it sits in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipStyle {
    pub text: TextStyle,
    /// Transparent means no chip background is drawn.
    pub background: Color,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Horizontal and vertical gap between chips, in points.
    pub gap: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#2563eb").unwrap();
        assert!((c.r - 0.145).abs() < 0.01);
        assert!((c.b - 0.922).abs() < 0.01);
    }

    #[test]
    fn color_from_short_hex() {
        let c = Color::from_hex("#666").unwrap();
        assert!((c.r - 0.4).abs() < 0.01);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn transparent_detection() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
