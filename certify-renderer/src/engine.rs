//! [`Renderer`] — one certificate record in, one PDF file out.
//!
//! # Render sequence
//!
//! | Step | Block         | Text                        |
//! |------|---------------|-----------------------------|
//! | 1    | `Title`       | `Certificate of Completion` |
//! | 2    | `Issuer`      | `Issued by {issuer}`        |
//! | 3    | `CourseTitle` | `{title}` (bold)            |
//! | 4    | `Description` | `{description}`             |
//! | 5    | `Footer`      | `Issued on: {Month DD, YYYY}` |

use std::path::PathBuf;

use chrono::NaiveDate;

use certify_core::CertificateRecord;

use crate::error::RenderError;
use crate::layout::{self, PageGeometry, PlacedLine};
use crate::pdf;

/// Renders certificates into a fixed output directory.
///
/// The directory is never created; a missing directory surfaces as
/// [`RenderError::Io`] on the first record.
#[derive(Debug, Clone)]
pub struct Renderer {
    out_dir: PathBuf,
    geometry: PageGeometry,
}

impl Renderer {
    /// Construct a [`Renderer`] writing US Letter pages under `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Renderer {
            out_dir: out_dir.into(),
            geometry: PageGeometry::LETTER,
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Lay out `record` without touching the filesystem.
    pub fn layout(
        &self,
        record: &CertificateRecord,
        issued_on: NaiveDate,
    ) -> Result<Vec<PlacedLine>, RenderError> {
        record.validate()?;
        layout::layout(&layout::story(record, issued_on), &self.geometry)
    }

    /// Render `record` to `<out_dir>/<filename>`, overwriting any existing file.
    ///
    /// Returns the path written.
    pub fn render(
        &self,
        record: &CertificateRecord,
        issued_on: NaiveDate,
    ) -> Result<PathBuf, RenderError> {
        let lines = self.layout(record, issued_on)?;
        let doc = pdf::build(&record.title, &lines, &self.geometry)?;
        let path = record.output_path(&self.out_dir);
        pdf::save(doc, &path)?;
        tracing::info!(path = %path.display(), "wrote certificate");
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
