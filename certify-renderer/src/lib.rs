//! # certify-renderer
//!
//! Lays out certificate records onto a US Letter page and writes them as PDF.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certify_core::catalog;
//! use certify_renderer::Renderer;
//!
//! fn render_all(today: chrono::NaiveDate) -> Result<(), certify_renderer::RenderError> {
//!     let renderer = Renderer::new("certificates");
//!     for record in catalog::builtin() {
//!         let path = renderer.render(&record, today)?;
//!         println!("{}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod style;

pub use engine::Renderer;
pub use error::RenderError;
pub use layout::{PageGeometry, PlacedLine};
pub use style::{Block, BlockStyle};
