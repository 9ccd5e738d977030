//! Certify core library — certificate records, catalogs, errors.
//!
//! - [`types`] — [`CertificateRecord`] and its field names
//! - [`catalog`] — the built-in record table and YAML catalog loading
//! - [`issue_date`] — footer date formatting
//! - [`error`] — [`CatalogError`]

pub mod catalog;
pub mod error;
pub mod issue_date;
pub mod types;

pub use error::CatalogError;
pub use types::{CertificateRecord, RecordField};
