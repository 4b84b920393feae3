//! Pagination – splits the laid-out column of boxes into A4 pages.
//!
//! Overflow flows naturally onto additional pages: an entry block that no
//! longer fits below the cursor starts the next page, a block taller than a
//! whole page is expanded so its children can split individually, and a
//! text box taller than a whole page is split at line boundaries. Nothing
//! is ever clipped.

use crate::fonts::FontManager;
use crate::layout::{BoxContent, PositionedBox};
use crate::layout_config::{LayoutBox, LayoutConfig, PageLayout, TextContent, TextLine};
use crate::style::{Color, FontFamily};

/// Recursively expand any box whose height exceeds a single page: containers
/// are replaced by their children so each can paginate individually, and
/// text boxes are split at line boundaries into page-sized runs.
fn flatten_for_pagination(
    boxes: &[PositionedBox],
    content_height: f32,
    fonts: &FontManager,
) -> Vec<PositionedBox> {
    let mut result = Vec::new();
    for pbox in boxes {
        if pbox.height <= content_height {
            result.push(pbox.clone());
            continue;
        }
        match &pbox.content {
            BoxContent::None if !pbox.children.is_empty() => {
                result.extend(flatten_for_pagination(
                    &pbox.children,
                    content_height,
                    fonts,
                ));
            }
            BoxContent::Text { lines, style } => {
                let line_height = fonts.line_height_pt(style.font_size, style.line_height);
                let max_lines = ((content_height / line_height) as usize).max(1);
                let mut start = 0usize;
                while start < lines.len() {
                    let end = (start + max_lines).min(lines.len());
                    result.push(PositionedBox {
                        x: pbox.x,
                        y: pbox.y + start as f32 * line_height,
                        width: pbox.width,
                        height: (end - start) as f32 * line_height,
                        content: BoxContent::Text {
                            lines: lines[start..end].to_vec(),
                            style: *style,
                        },
                        children: Vec::new(),
                    });
                    start = end;
                }
            }
            _ => result.push(pbox.clone()),
        }
    }
    result
}

/// Convert positioned boxes into a paginated [`LayoutConfig`].
pub fn paginate(
    boxes: &[PositionedBox],
    page_width: f32,
    page_height: f32,
    page_margin: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> LayoutConfig {
    let mut config = LayoutConfig {
        title: "resume".to_string(),
        page_width_pt: page_width,
        page_height_pt: page_height,
        pages: Vec::new(),
    };

    let content_height = page_height - 2.0 * page_margin;

    // Expand oversized blocks and split oversized text runs.
    let flat = flatten_for_pagination(boxes, content_height, fonts);

    let mut current_page = PageLayout {
        page_index: 0,
        boxes: Vec::new(),
    };

    // Document-space y at which the current page begins. All PositionedBox.y
    // values are absolute document coordinates, so `pbox.y - page_start_doc_y`
    // gives the y-on-page for any box.
    let mut page_start_doc_y = 0.0f32;

    for pbox in &flat {
        let y_on_page = (pbox.y - page_start_doc_y).max(0.0);
        let box_bottom = y_on_page + pbox.height;

        if box_bottom > content_height && !current_page.boxes.is_empty() {
            config.pages.push(current_page);
            current_page = PageLayout {
                page_index: config.pages.len(),
                boxes: Vec::new(),
            };
            page_start_doc_y = pbox.y;
        }

        let y_on_page = (pbox.y - page_start_doc_y).max(0.0);
        let abs_y = page_margin + y_on_page;
        current_page
            .boxes
            .push(build_layout_box(pbox, pbox.x, abs_y, family, fonts));
    }

    if !current_page.boxes.is_empty() {
        config.pages.push(current_page);
    }
    if config.pages.is_empty() {
        config.pages.push(PageLayout {
            page_index: 0,
            boxes: Vec::new(),
        });
    }
    config
}

fn color_array(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a]
}

/// Recursively build a [`LayoutBox`] tree where every box carries
/// *page-absolute* x/y coordinates (origin = top-left of the physical page).
///
/// Each child's PositionedBox.y is a document-space absolute, so
/// `abs_y + (child.y − pbox.y)` gives the child's position on the page.
fn build_layout_box(
    pbox: &PositionedBox,
    abs_x: f32,
    abs_y: f32,
    family: FontFamily,
    fonts: &FontManager,
) -> LayoutBox {
    let mut lb = LayoutBox::new(abs_x, abs_y, pbox.width, pbox.height);

    match &pbox.content {
        BoxContent::Text { lines, style } => {
            let line_height = fonts.line_height_pt(style.font_size, style.line_height);
            lb.text = Some(TextContent {
                lines: lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| TextLine {
                        text: line.text.clone(),
                        x_offset: line.x_offset,
                        y_offset: i as f32 * line_height,
                    })
                    .collect(),
                font_family: family.name().to_string(),
                font_size: style.font_size,
                bold: style.bold(),
                color: color_array(style.color),
                line_height,
            });
        }
        BoxContent::Chip { text, style } => {
            if !style.background.is_transparent() {
                lb.background_color = Some(color_array(style.background));
            }
            let line_height =
                fonts.line_height_pt(style.text.font_size, style.text.line_height);
            lb.text = Some(TextContent {
                lines: vec![TextLine {
                    text: text.clone(),
                    x_offset: style.padding_x,
                    y_offset: style.padding_y,
                }],
                font_family: family.name().to_string(),
                font_size: style.text.font_size,
                bold: style.text.bold(),
                color: color_array(style.text.color),
                line_height,
            });
        }
        BoxContent::Rule { color } => {
            lb.background_color = Some(color_array(*color));
        }
        BoxContent::None => {}
    }

    for child in &pbox.children {
        let child_abs_y = abs_y + (child.y - pbox.y);
        lb.children
            .push(build_layout_box(child, child.x, child_abs_y, family, fonts));
    }

    lb
}
