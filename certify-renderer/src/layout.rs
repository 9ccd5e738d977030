//! Page geometry and the top-down flow of certificate blocks.
//!
//! [`story`] turns a record into the fixed element sequence; [`layout`]
//! wraps each paragraph to the frame width and assigns every line a baseline.
//! Coordinates are PDF points with the origin at the bottom-left of the page.

use chrono::NaiveDate;

use certify_core::{issue_date, CertificateRecord};

use crate::error::RenderError;
use crate::metrics::{first_unencodable, text_width};
use crate::style::{Align, Block, BlockStyle, FontFace};

/// Points per inch.
pub const INCH: f32 = 72.0;

// ---------------------------------------------------------------------------
// PageGeometry
// ---------------------------------------------------------------------------

/// Page size, margins and frame padding, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Inset applied inside the margins on every side.
    pub frame_padding: f32,
}

impl PageGeometry {
    /// US Letter with 1 inch margins.
    pub const LETTER: PageGeometry = PageGeometry {
        width: 8.5 * INCH,
        height: 11.0 * INCH,
        margin_top: INCH,
        margin_bottom: INCH,
        margin_left: INCH,
        margin_right: INCH,
        frame_padding: 6.0,
    };

    pub fn frame_left(&self) -> f32 {
        self.margin_left + self.frame_padding
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right - 2.0 * self.frame_padding
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top - self.frame_padding
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom + self.frame_padding
    }
}

// ---------------------------------------------------------------------------
// Story
// ---------------------------------------------------------------------------

/// A unit of vertical flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Paragraph { block: Block, text: String },
    /// Fixed vertical gap in points.
    Spacer(f32),
}

/// Text shown in `block` for `record`.
pub fn block_text(block: Block, record: &CertificateRecord, issued_on: NaiveDate) -> String {
    match block {
        Block::Title => "Certificate of Completion".to_string(),
        Block::Issuer => format!("Issued by {}", record.issuer),
        Block::CourseTitle => record.title.clone(),
        Block::Description => record.description.clone(),
        Block::Footer => issue_date::footer_line(issued_on),
    }
}

/// The fixed element sequence for one certificate.
pub fn story(record: &CertificateRecord, issued_on: NaiveDate) -> Vec<Element> {
    let mut elements = Vec::with_capacity(Block::all().len() * 2);
    for &block in Block::all() {
        elements.push(Element::Paragraph {
            block,
            text: block_text(block, record, issued_on),
        });
        let gap = block.spacer_after();
        if gap > 0.0 {
            elements.push(Element::Spacer(gap));
        }
    }
    elements
}

// ---------------------------------------------------------------------------
// Line wrapping
// ---------------------------------------------------------------------------

/// Greedy word wrap of `text` to `max_width` points.
///
/// Runs of whitespace collapse to one space. A single word wider than
/// `max_width` gets a line of its own.
pub fn wrap(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", face, size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = text_width(word, face, size);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A line of text with its final position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub block: Block,
    pub text: String,
    pub style: BlockStyle,
    /// Left edge of the line.
    pub x: f32,
    pub baseline: f32,
}

fn line_x(geometry: &PageGeometry, style: &BlockStyle, line_width: f32) -> f32 {
    let left = geometry.frame_left();
    let free = geometry.frame_width() - line_width;
    match style.align {
        Align::Center => left + free / 2.0,
    }
}

/// Flow `elements` from the top of the frame downwards.
///
/// Fails with [`RenderError::UnencodableText`] if a line holds a character the
/// built-in fonts cannot show, and with [`RenderError::Overflow`] if a
/// paragraph would cross the bottom of the frame; certificates are always a
/// single page.
pub fn layout(
    elements: &[Element],
    geometry: &PageGeometry,
) -> Result<Vec<PlacedLine>, RenderError> {
    let mut cursor = geometry.frame_top();
    let mut placed = Vec::new();

    for element in elements {
        match element {
            Element::Spacer(gap) => cursor -= gap,
            Element::Paragraph { block, text } => {
                let style = block.style();
                let lines = wrap(text, style.face, style.size, geometry.frame_width());
                if let Some(ch) = lines.iter().find_map(|l| first_unencodable(l)) {
                    return Err(RenderError::UnencodableText { block: *block, ch });
                }
                let height = style.leading * lines.len() as f32;
                if cursor - height < geometry.frame_bottom() {
                    return Err(RenderError::Overflow { block: *block });
                }
                tracing::debug!(?block, lines = lines.len(), top = cursor, "laid out block");

                let mut baseline = cursor - style.size;
                for line in lines {
                    let width = text_width(&line, style.face, style.size);
                    placed.push(PlacedLine {
                        block: *block,
                        x: line_x(geometry, &style, width),
                        baseline,
                        style,
                        text: line,
                    });
                    baseline -= style.leading;
                }
                cursor -= height + style.space_after;
            }
        }
    }
    Ok(placed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
