//! Certify — render course completion certificates to PDF.
//!
//! # Usage
//!
//! ```text
//! certify [--out-dir <DIR>] [--catalog <FILE>] [--date <YYYY-MM-DD>]
//! ```
//!
//! With no arguments the built-in certificates are written to `certificates/`,
//! which must already exist.

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::render::RenderArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "certify",
    version,
    about = "Render course completion certificates as PDF files",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    cli.render.run()
}

/// Diagnostics go to stderr; stdout is reserved for the per-certificate lines.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
