//! Error types for certify-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::RecordField;

/// All errors that can arise while loading or checking certificate records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog parsed but lists no records.
    #[error("catalog at {path} contains no certificates")]
    EmptyCatalog { path: PathBuf },

    /// A record field needed for formatting is empty.
    #[error("certificate '{filename}' has an empty {field}")]
    EmptyField { filename: String, field: RecordField },
}
