//! Domain types for certificate records.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// RecordField
// ---------------------------------------------------------------------------

/// Names the four fields of a [`CertificateRecord`], for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Filename,
    Title,
    Issuer,
    Description,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Filename => write!(f, "filename"),
            RecordField::Title => write!(f, "title"),
            RecordField::Issuer => write!(f, "issuer"),
            RecordField::Description => write!(f, "description"),
        }
    }
}

// ---------------------------------------------------------------------------
// CertificateRecord
// ---------------------------------------------------------------------------

/// One certificate to render: where it goes and what it says.
///
/// `filename` is resolved against the output directory; it is the record's
/// only identity. Two records sharing a filename overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub filename: String,
    pub title: String,
    pub issuer: String,
    pub description: String,
}

impl CertificateRecord {
    pub fn new(
        filename: impl Into<String>,
        title: impl Into<String>,
        issuer: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            issuer: issuer.into(),
            description: description.into(),
        }
    }

    /// Output path of this record under `out_dir`. Pure, no I/O.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.filename)
    }

    /// Check that every field carries visible text.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fields = [
            (RecordField::Filename, &self.filename),
            (RecordField::Title, &self.title),
            (RecordField::Issuer, &self.issuer),
            (RecordField::Description, &self.description),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    filename: self.filename.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
