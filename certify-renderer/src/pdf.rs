//! PDF assembly with printpdf's built-in Helvetica faces.
//!
//! Built-in fonts need no font files and are written with WinAnsi encoding,
//! which covers the Latin text and dashes certificates use.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::error::{io_err, RenderError};
use crate::layout::{PageGeometry, PlacedLine};
use crate::style::FontFace;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, RenderError> {
        Ok(Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
        }
    }
}

/// Build a one-page document titled `title` holding `lines`.
pub fn build(
    title: &str,
    lines: &[PlacedLine],
    geometry: &PageGeometry,
) -> Result<PdfDocumentReference, RenderError> {
    let (doc, page, layer) =
        PdfDocument::new(title, mm(geometry.width), mm(geometry.height), "Certificate");
    let fonts = Fonts::load(&doc)?;
    let canvas = doc.get_page(page).get_layer(layer);

    for line in lines {
        let (r, g, b) = line.style.color.to_unit();
        canvas.set_fill_color(Color::Rgb(printpdf::Rgb::new(r, g, b, None)));
        canvas.use_text(
            line.text.as_str(),
            line.style.size,
            mm(line.x),
            mm(line.baseline),
            fonts.get(line.style.face),
        );
    }
    Ok(doc)
}

/// Write `doc` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn save(doc: PdfDocumentReference, path: &Path) -> Result<(), RenderError> {
    let file = File::create(path).map_err(|e| io_err(path, e))?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)?;
    writer.flush().map_err(|e| io_err(path, e))
}
