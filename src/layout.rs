//! Flow layout – converts the semantic [`DocNode`] tree into positioned
//! boxes in absolute document coordinates (y = 0 at the top of the first
//! page's content area; pagination later slices this column into pages).
//!
//! The document is a single column of `page_width − 2·margin` points, so a
//! cursor-driven flow with measured text is sufficient: paragraphs wrap to
//! the column, split lines place their right half flush with the column
//! edge, and chip rows wrap greedily with the profile's gap.

use crate::document::DocNode;
use crate::fonts::{wrap_text, FontManager};
use crate::style::{ChipStyle, Color, FontFamily, TextAlign, TextStyle};

/// A positioned box in document coordinates (before page splitting).
/// `x` is page-absolute (the page margin is already included).
#[derive(Debug, Clone)]
pub struct PositionedBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub content: BoxContent,
    pub children: Vec<PositionedBox>,
}

/// One pre-wrapped line with its horizontal alignment offset.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub x_offset: f32,
}

#[derive(Debug, Clone)]
pub enum BoxContent {
    /// Pure container (entry block, chip row).
    None,
    Text {
        lines: Vec<Line>,
        style: TextStyle,
    },
    /// One skill chip; the box carries the chip background.
    Chip {
        text: String,
        style: ChipStyle,
    },
    /// Horizontal divider; the box height is the rule thickness.
    Rule {
        color: Color,
    },
}

/// Lay out a document into top-level positioned boxes.
pub fn compute_layout(
    nodes: &[DocNode],
    page_width: f32,
    page_margin: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> Vec<PositionedBox> {
    let content_width = page_width - 2.0 * page_margin;
    let (boxes, _) = layout_nodes(nodes, page_margin, 0.0, content_width, family, fonts);
    boxes
}

/// Lay out a run of sibling nodes starting at `start_y`. Returns the boxes
/// and the bottom edge of the run (excluding the last node's trailing gap).
fn layout_nodes(
    nodes: &[DocNode],
    x: f32,
    start_y: f32,
    width: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> (Vec<PositionedBox>, f32) {
    let mut boxes = Vec::new();
    let mut y = start_y;
    let mut bottom = start_y;

    for node in nodes {
        let (pbox, spacing_after) = layout_node(node, x, y, width, family, fonts);
        bottom = pbox.y + pbox.height;
        y = bottom + spacing_after;
        boxes.push(pbox);
    }

    (boxes, bottom)
}

fn layout_node(
    node: &DocNode,
    x: f32,
    y: f32,
    width: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> (PositionedBox, f32) {
    match node {
        DocNode::Block {
            children,
            spacing_after,
        } => {
            let (child_boxes, bottom) = layout_nodes(children, x, y, width, family, fonts);
            let pbox = PositionedBox {
                x,
                y,
                width,
                height: (bottom - y).max(0.0),
                content: BoxContent::None,
                children: child_boxes,
            };
            (pbox, *spacing_after)
        }
        DocNode::Paragraph {
            text,
            style,
            align,
            spacing_after,
        } => {
            let wrapped = wrap_text(text, style.font_size, style.bold(), family, width, fonts);
            let line_height = fonts.line_height_pt(style.font_size, style.line_height);
            let lines: Vec<Line> = wrapped
                .into_iter()
                .map(|line| {
                    let x_offset = match align {
                        TextAlign::Left => 0.0,
                        TextAlign::Center => {
                            ((width - text_width(&line, style, family, fonts)) / 2.0).max(0.0)
                        }
                        TextAlign::Right => {
                            (width - text_width(&line, style, family, fonts)).max(0.0)
                        }
                    };
                    Line {
                        text: line,
                        x_offset,
                    }
                })
                .collect();
            let height = lines.len() as f32 * line_height;
            let pbox = PositionedBox {
                x,
                y,
                width,
                height,
                content: BoxContent::Text {
                    lines,
                    style: *style,
                },
                children: Vec::new(),
            };
            (pbox, *spacing_after)
        }
        DocNode::SplitLine {
            left,
            left_style,
            right,
            right_style,
            spacing_after,
        } => {
            let left_lh = fonts.line_height_pt(left_style.font_size, left_style.line_height);
            let right_lh = fonts.line_height_pt(right_style.font_size, right_style.line_height);
            let right_w = text_width(right, right_style, family, fonts);
            // The left half may not run into the right half, so it wraps to
            // the remaining width.
            let left_w = (width - right_w - 8.0).max(0.0);
            let left_lines: Vec<Line> =
                wrap_text(left, left_style.font_size, left_style.bold(), family, left_w, fonts)
                    .into_iter()
                    .map(|text| Line { text, x_offset: 0.0 })
                    .collect();
            let left_h = left_lines.len() as f32 * left_lh;

            let left_box = PositionedBox {
                x,
                y,
                width: left_w,
                height: left_h,
                content: BoxContent::Text {
                    lines: left_lines,
                    style: *left_style,
                },
                children: Vec::new(),
            };
            let right_box = PositionedBox {
                x: x + width - right_w,
                y,
                width: right_w,
                height: right_lh,
                content: BoxContent::Text {
                    lines: vec![Line {
                        text: right.clone(),
                        x_offset: 0.0,
                    }],
                    style: *right_style,
                },
                children: Vec::new(),
            };
            let pbox = PositionedBox {
                x,
                y,
                width,
                height: left_h.max(right_lh),
                content: BoxContent::None,
                children: vec![left_box, right_box],
            };
            (pbox, *spacing_after)
        }
        DocNode::ChipRow {
            chips,
            style,
            spacing_after,
        } => {
            let text_style = style.text;
            let chip_height = fonts.line_height_pt(text_style.font_size, text_style.line_height)
                + 2.0 * style.padding_y;
            let mut children = Vec::new();
            let mut cursor_x = 0.0f32;
            let mut row_y = y;

            for chip in chips {
                let chip_width =
                    text_width(chip, &text_style, family, fonts) + 2.0 * style.padding_x;
                if cursor_x > 0.0 && cursor_x + chip_width > width {
                    cursor_x = 0.0;
                    row_y += chip_height + style.gap;
                }
                children.push(PositionedBox {
                    x: x + cursor_x,
                    y: row_y,
                    width: chip_width.min(width),
                    height: chip_height,
                    content: BoxContent::Chip {
                        text: chip.clone(),
                        style: *style,
                    },
                    children: Vec::new(),
                });
                cursor_x += chip_width + style.gap;
            }

            let height = if children.is_empty() {
                0.0
            } else {
                row_y + chip_height - y
            };
            let pbox = PositionedBox {
                x,
                y,
                width,
                height,
                content: BoxContent::None,
                children,
            };
            (pbox, *spacing_after)
        }
        DocNode::Rule {
            thickness,
            color,
            spacing_after,
        } => {
            let pbox = PositionedBox {
                x,
                y,
                width,
                height: *thickness,
                content: BoxContent::Rule { color: *color },
                children: Vec::new(),
            };
            (pbox, *spacing_after)
        }
    }
}

/// Text width including the style's letter spacing.
fn text_width(text: &str, style: &TextStyle, family: FontFamily, fonts: &FontManager) -> f32 {
    let base = fonts.measure_text_width(text, style.font_size, style.bold(), family);
    let gaps = text.chars().count().saturating_sub(1) as f32;
    base + style.letter_spacing * gaps
}
