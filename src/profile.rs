//! Template registry – the fixed mapping from [`TemplateId`] to a complete
//! [`TemplateProfile`].
//!
//! Each profile defines every renderable role; the exhaustive match in
//! [`TemplateId::profile`] means a missing profile is a compile error, and
//! the document builder never needs a fallback for a missing style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::{ChipStyle, Color, Divider, FontFamily, FontWeight, TextAlign, TextStyle};

/// Identifier selecting one of the fixed visual style profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    #[default]
    Classic,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Modern, TemplateId::Classic, TemplateId::Minimal];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
        }
    }

    /// Look up the complete style profile for this template.
    pub fn profile(self) -> &'static TemplateProfile {
        match self {
            TemplateId::Modern => &MODERN,
            TemplateId::Classic => &CLASSIC,
            TemplateId::Minimal => &MINIMAL,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(TemplateId::Modern),
            "classic" => Ok(TemplateId::Classic),
            "minimal" => Ok(TemplateId::Minimal),
            other => Err(format!(
                "Unknown template {other:?} (expected modern, classic, or minimal)"
            )),
        }
    }
}

/// Vertical spacing after one entry of each list section, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrySpacing {
    pub experience: f32,
    pub education: f32,
    pub certification: f32,
    pub award: f32,
    pub language: f32,
}

/// Complete set of style rules for every renderable role of a resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateProfile {
    /// Page margin on all four sides, in points.
    pub page_margin: f32,
    pub font_family: FontFamily,

    // Header
    pub name: TextStyle,
    pub name_spacing: f32,
    pub contact: TextStyle,
    pub contact_spacing: f32,
    pub header_align: TextAlign,
    pub header_divider: Option<Divider>,
    pub header_spacing: f32,

    // Section chrome
    pub section_title: TextStyle,
    pub section_title_uppercase: bool,
    pub section_title_divider: Option<Divider>,
    pub section_title_spacing: f32,
    pub section_spacing: f32,

    // Entry roles
    pub company: TextStyle,
    pub company_spacing: f32,
    pub position: TextStyle,
    pub position_spacing: f32,
    pub duration: TextStyle,
    pub body: TextStyle,
    pub chip: ChipStyle,
    pub entry_spacing: EntrySpacing,
}

const GRAY_444: Color = Color::rgb8(0x44, 0x44, 0x44);
const GRAY_555: Color = Color::rgb8(0x55, 0x55, 0x55);
const GRAY_666: Color = Color::rgb8(0x66, 0x66, 0x66);
const GRAY_999: Color = Color::rgb8(0x99, 0x99, 0x99);
const NEAR_BLACK: Color = Color::rgb8(0x11, 0x11, 0x11);
const BLUE: Color = Color::rgb8(0x25, 0x63, 0xeb);
const RULE_GRAY: Color = Color::rgb8(0xe5, 0xe7, 0xeb);
const CHIP_GRAY: Color = Color::rgb8(0xf3, 0xf4, 0xf6);

/// Shared entry roles: duration, position, and body text read the same in
/// all three templates.
const DURATION: TextStyle = TextStyle::new(11.0, FontWeight::Normal, GRAY_666);
const POSITION: TextStyle = TextStyle::new(11.0, FontWeight::Normal, Color::BLACK);
const BODY: TextStyle = TextStyle::new(10.0, FontWeight::Normal, GRAY_444).with_line_height(1.4);
const ENTRY_SPACING: EntrySpacing = EntrySpacing {
    experience: 10.0,
    education: 8.0,
    certification: 6.0,
    award: 6.0,
    language: 3.0,
};

static MODERN: TemplateProfile = TemplateProfile {
    page_margin: 30.0,
    font_family: FontFamily::Helvetica,
    name: TextStyle::new(24.0, FontWeight::Bold, BLUE),
    name_spacing: 5.0,
    contact: TextStyle::new(11.0, FontWeight::Normal, GRAY_666),
    contact_spacing: 3.0,
    header_align: TextAlign::Center,
    header_divider: None,
    header_spacing: 20.0,
    section_title: TextStyle::new(14.0, FontWeight::Bold, Color::BLACK),
    section_title_uppercase: true,
    section_title_divider: Some(Divider {
        thickness: 1.0,
        color: RULE_GRAY,
        gap: 3.0,
    }),
    section_title_spacing: 10.0,
    section_spacing: 15.0,
    company: TextStyle::new(12.0, FontWeight::Bold, Color::BLACK),
    company_spacing: 5.0,
    position: POSITION,
    position_spacing: 3.0,
    duration: DURATION,
    body: BODY,
    chip: ChipStyle {
        text: TextStyle::new(11.0, FontWeight::Normal, BLUE),
        background: CHIP_GRAY,
        padding_x: 8.0,
        padding_y: 4.0,
        gap: 5.0,
    },
    entry_spacing: ENTRY_SPACING,
};

static CLASSIC: TemplateProfile = TemplateProfile {
    page_margin: 35.0,
    font_family: FontFamily::Times,
    name: TextStyle::new(26.0, FontWeight::Bold, Color::BLACK),
    name_spacing: 6.0,
    contact: TextStyle::new(11.0, FontWeight::Normal, Color::BLACK),
    contact_spacing: 2.0,
    header_align: TextAlign::Left,
    header_divider: Some(Divider {
        thickness: 2.0,
        color: Color::BLACK,
        gap: 10.0,
    }),
    header_spacing: 25.0,
    section_title: TextStyle::new(16.0, FontWeight::Bold, Color::BLACK),
    section_title_uppercase: false,
    section_title_divider: Some(Divider {
        thickness: 1.0,
        color: GRAY_999,
        gap: 2.0,
    }),
    section_title_spacing: 8.0,
    section_spacing: 18.0,
    company: TextStyle::new(13.0, FontWeight::Bold, Color::BLACK),
    company_spacing: 3.0,
    position: POSITION,
    position_spacing: 3.0,
    duration: DURATION,
    body: BODY,
    chip: ChipStyle {
        text: TextStyle::new(11.0, FontWeight::Normal, Color::BLACK),
        background: Color::TRANSPARENT,
        padding_x: 0.0,
        padding_y: 0.0,
        gap: 6.0,
    },
    entry_spacing: EntrySpacing {
        experience: 12.0,
        ..ENTRY_SPACING
    },
};

static MINIMAL: TemplateProfile = TemplateProfile {
    page_margin: 40.0,
    font_family: FontFamily::Helvetica,
    name: TextStyle::new(28.0, FontWeight::Bold, Color::BLACK),
    name_spacing: 8.0,
    contact: TextStyle::new(10.0, FontWeight::Normal, GRAY_555),
    contact_spacing: 2.0,
    header_align: TextAlign::Left,
    header_divider: None,
    header_spacing: 30.0,
    section_title: TextStyle::new(12.0, FontWeight::Bold, NEAR_BLACK).with_letter_spacing(1.0),
    section_title_uppercase: true,
    section_title_divider: None,
    section_title_spacing: 12.0,
    section_spacing: 20.0,
    company: TextStyle::new(11.0, FontWeight::Bold, Color::BLACK),
    company_spacing: 4.0,
    position: POSITION,
    position_spacing: 3.0,
    duration: DURATION,
    body: BODY,
    chip: ChipStyle {
        text: TextStyle::new(10.0, FontWeight::Normal, GRAY_666),
        background: Color::TRANSPARENT,
        padding_x: 6.0,
        padding_y: 3.0,
        gap: 8.0,
    },
    entry_spacing: EntrySpacing {
        experience: 12.0,
        ..ENTRY_SPACING
    },
};
