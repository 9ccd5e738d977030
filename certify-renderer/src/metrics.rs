//! Advance widths for the built-in Helvetica faces.
//!
//! Values are the standard Adobe AFM widths in 1/1000 em for printable ASCII
//! (`' '..='~'`). Other characters fall back to [`FALLBACK_WIDTH`], except the
//! dashes and quotes that WinAnsi can encode.
//!
//! Built-in fonts are written in WinAnsi; [`winansi_byte`] tells which
//! characters survive that encoding.

use crate::style::FontFace;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of `ch` in 1/1000 em.
pub fn char_width(face: FontFace, ch: char) -> u16 {
    let table = match face {
        FontFace::Helvetica => &HELVETICA,
        FontFace::HelveticaBold => &HELVETICA_BOLD,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        '\u{2013}' => 556, // en dash
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => match face {
            FontFace::Helvetica => 222,
            FontFace::HelveticaBold => 278,
        },
        '\u{201c}' | '\u{201d}' => match face {
            FontFace::Helvetica => 333,
            FontFace::HelveticaBold => 500,
        },
        '\u{2022}' => 350,
        _ => FALLBACK_WIDTH,
    }
}

/// Characters WinAnsi places in `0x80..=0x9f`, indexed from `0x80`.
/// `None` marks the five unassigned codes.
#[rustfmt::skip]
const WINANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20ac}'), None, Some('\u{201a}'), Some('\u{0192}'),
    Some('\u{201e}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02c6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017d}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201c}'),
    Some('\u{201d}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02dc}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203a}'),
    Some('\u{0153}'), None, Some('\u{017e}'), Some('\u{0178}'),
];

/// WinAnsi code for `ch`, or `None` if the built-in fonts cannot show it.
pub fn winansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => Some(ch as u8),
        _ => WINANSI_HIGH
            .iter()
            .position(|c| *c == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}

/// First character of `text` that WinAnsi cannot encode.
pub fn first_unencodable(text: &str) -> Option<char> {
    text.chars().find(|c| winansi_byte(*c).is_none())
}

/// Width of `text` set in `face` at `size` points, in points.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(face, c))).sum();
    units as f32 * size / 1000.0
}
