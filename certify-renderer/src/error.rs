//! Error types for certify-renderer.

use std::path::PathBuf;

use thiserror::Error;

use certify_core::CatalogError;

use crate::style::Block;

/// All errors that can arise while rendering a certificate.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record cannot be formatted (empty field).
    #[error(transparent)]
    Record(#[from] CatalogError),

    /// A block holds a character the built-in WinAnsi fonts cannot show.
    #[error("the {block:?} block contains {ch:?}, which the built-in fonts cannot encode")]
    UnencodableText { block: Block, ch: char },

    /// Content does not fit on a single page.
    #[error("certificate content overflows the page at the {block:?} block")]
    Overflow { block: Block },

    /// printpdf failed to assemble or serialize the document.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// Filesystem error while creating or writing the output file.
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

impl From<printpdf::Error> for RenderError {
    fn from(e: printpdf::Error) -> Self {
        RenderError::Pdf(e.to_string())
    }
}
