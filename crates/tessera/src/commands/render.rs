//! `tessera render` command implementation.

use std::path::PathBuf;

use clap::Args;
use tessera_site::{PageOutcome, RenderedPage, Site};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page slug to render (e.g. `/` or `/pricing`).
    slug: String,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    site: SiteArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if no page is configured at the slug or the output
    /// file cannot be written.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open_site()?;
        let page = render_slug(&site, &self.slug)?;

        for diagnostic in &page.diagnostics {
            output.warning(&diagnostic.to_string());
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &page.html)?;
                tracing::debug!(path = %path.display(), bytes = page.html.len(), "Wrote page");
                output.success(&format!(
                    "Rendered {} ({} sections) to {}",
                    self.slug,
                    page.section_count,
                    path.display()
                ));
            }
            None => output.print(&page.html),
        }
        Ok(())
    }
}

fn render_slug(site: &Site, slug: &str) -> Result<RenderedPage, CliError> {
    match site.render(slug) {
        PageOutcome::Page(page) => Ok(page),
        PageOutcome::NotFound(_) => Err(CliError::Validation(format!(
            "No page configured at {slug}"
        ))),
        PageOutcome::Fallback(_) => {
            // The fallback hides load errors, so surface them here.
            site.try_load()?;
            Err(CliError::Validation(format!(
                "No usable site configuration in {}",
                site.config_dir().display()
            )))
        }
    }
}
