//! Certificate catalogs.
//!
//! The built-in table is what `certify` renders by default. A YAML file with
//! the same shape can replace it:
//!
//! ```text
//! - filename: Example.pdf
//!   title: Example Course
//!   issuer: Example Org
//!   description: What the course covered
//! ```
//!
//! Record order is render order.

use std::path::Path;

use crate::error::CatalogError;
use crate::types::CertificateRecord;

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

const BUILTIN: &[(&str, &str, &str, &str)] = &[
    (
        "Infosys_Python_Part1.pdf",
        "Programming Fundamentals using Python – Part 1",
        "Infosys Springboard",
        "Certificate of Completion for mastering Python programming fundamentals",
    ),
    (
        "GeeksforGeeks_Python_Course.pdf",
        "Free Python Course with Certificate",
        "GeeksforGeeks",
        "3-week Python course covering basic concepts, syntax, and logic building",
    ),
    (
        "Accenture_AI_Course.pdf",
        "Artificial Intelligence Course",
        "Accenture",
        "Understanding AI fundamentals, industry applications, and key trends",
    ),
    (
        "MongoDB_Developer_Associate.pdf",
        "MongoDB Developer Associate",
        "MongoDB",
        "Associate level certification for database design and integration",
    ),
];

/// The four built-in certificates, in render order.
pub fn builtin() -> Vec<CertificateRecord> {
    BUILTIN
        .iter()
        .map(|(filename, title, issuer, description)| {
            CertificateRecord::new(*filename, *title, *issuer, *description)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// YAML catalogs
// ---------------------------------------------------------------------------

/// Load a catalog from a YAML list of records.
///
/// Returns `CatalogError::Parse` (with path + line context) if malformed, and
/// `CatalogError::EmptyCatalog` if the list is empty. Field contents are not
/// checked here; see [`CertificateRecord::validate`].
pub fn load(path: &Path) -> Result<Vec<CertificateRecord>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<CertificateRecord> =
        serde_yaml::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}
