//! Style descriptors for the five certificate blocks.
//!
//! Every certificate is laid out from the same [`Block`] sequence; only the
//! text changes between records.

use crate::layout::INCH;

/// One of the two built-in PDF faces used on a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

/// Horizontal placement of a line inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::from_hex(0x000000);
    /// Primary accent, used for the heading.
    pub const ACCENT: Rgb = Rgb::from_hex(0x3b82f6);
    /// Secondary accent, used for the issuer line.
    pub const ACCENT_SECONDARY: Rgb = Rgb::from_hex(0x06b6d4);
    pub const MUTED: Rgb = Rgb::from_hex(0x808080);

    /// `0xRRGGBB` → [`Rgb`].
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// Typography and spacing for a paragraph. Sizes are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub face: FontFace,
    pub size: f32,
    /// Baseline-to-baseline distance between wrapped lines.
    pub leading: f32,
    pub color: Rgb,
    pub align: Align,
    /// Gap left below the paragraph before the next element.
    pub space_after: f32,
}

impl BlockStyle {
    fn centered(face: FontFace, size: f32, color: Rgb, space_after: f32) -> Self {
        BlockStyle {
            face,
            size,
            leading: size * 1.2,
            color,
            align: Align::Center,
            space_after,
        }
    }
}

/// The text blocks of a certificate, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// "Certificate of Completion".
    Title,
    /// "Issued by {issuer}".
    Issuer,
    /// The course name, in bold.
    CourseTitle,
    Description,
    /// "Issued on: {date}".
    Footer,
}

impl Block {
    /// All blocks in render order.
    pub fn all() -> &'static [Block] {
        &[
            Block::Title,
            Block::Issuer,
            Block::CourseTitle,
            Block::Description,
            Block::Footer,
        ]
    }

    pub fn style(self) -> BlockStyle {
        match self {
            Block::Title => BlockStyle::centered(FontFace::HelveticaBold, 28.0, Rgb::ACCENT, 20.0),
            Block::Issuer => {
                BlockStyle::centered(FontFace::Helvetica, 14.0, Rgb::ACCENT_SECONDARY, 30.0)
            }
            Block::CourseTitle => {
                BlockStyle::centered(FontFace::HelveticaBold, 12.0, Rgb::BLACK, 20.0)
            }
            Block::Description => BlockStyle::centered(FontFace::Helvetica, 12.0, Rgb::BLACK, 20.0),
            Block::Footer => BlockStyle::centered(FontFace::Helvetica, 10.0, Rgb::MUTED, 0.0),
        }
    }

    /// Fixed vertical gap inserted after this block, in points.
    pub fn spacer_after(self) -> f32 {
        match self {
            Block::Title => INCH * 3.0 / 10.0,
            Block::CourseTitle => INCH * 2.0 / 10.0,
            Block::Description => INCH / 2.0,
            Block::Issuer | Block::Footer => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode() {
        assert_eq!(Rgb::ACCENT, Rgb { r: 0x3b, g: 0x82, b: 0xf6 });
        assert_eq!(Rgb::MUTED.to_unit(), (128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0));
    }

    #[test]
    fn every_block_is_centered() {
        for block in Block::all() {
            assert_eq!(block.style().align, Align::Center, "{block:?}");
        }
    }

    #[test]
    fn font_sizes_shrink_from_title_to_footer() {
        let sizes: Vec<f32> = [Block::Title, Block::Issuer, Block::Description, Block::Footer]
            .iter()
            .map(|b| b.style().size)
            .collect();
        assert_eq!(sizes, [28.0, 14.0, 12.0, 10.0]);
    }

    #[test]
    fn course_title_is_bold_description_is_not() {
        assert_eq!(Block::CourseTitle.style().face, FontFace::HelveticaBold);
        assert_eq!(Block::Description.style().face, FontFace::Helvetica);
    }
}
