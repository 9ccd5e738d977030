//! `certify` — render every record of a catalog, in order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

use certify_core::{catalog, CertificateRecord};
use certify_renderer::Renderer;

/// Arguments for a render run.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Directory the certificate filenames resolve against. Must exist.
    #[arg(long, value_name = "DIR", default_value = "certificates")]
    pub out_dir: PathBuf,

    /// YAML list of certificates to render instead of the built-in set.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Issue date printed in the footer (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let records = self.records()?;
        let issued_on = self.date.unwrap_or_else(|| Local::now().date_naive());
        tracing::debug!(
            count = records.len(),
            out_dir = %self.out_dir.display(),
            %issued_on,
            "rendering certificates"
        );

        let renderer = Renderer::new(&self.out_dir);
        for record in &records {
            renderer
                .render(record, issued_on)
                .with_context(|| format!("failed to create '{}'", record.filename))?;
            println!("✓ Created {}", record.title);
        }

        println!("All certificates created successfully!");
        Ok(())
    }

    fn records(&self) -> Result<Vec<CertificateRecord>> {
        match &self.catalog {
            Some(path) => catalog::load(path)
                .with_context(|| format!("cannot load catalog '{}'", path.display())),
            None => Ok(catalog::builtin()),
        }
    }
}
