//! `tessera validate` command implementation.

use clap::Args;
use tessera_sections::{SectionReport, health_report, validate_sections};
use tessera_site::{ConfigDocument, PageConfig};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only validate the page at this slug.
    #[arg(long)]
    slug: Option<String>,

    /// Print a Markdown health report for each page.
    #[arg(long)]
    report: bool,
}

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or any section
    /// is invalid.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open_site()?;

        let Some(document) = site.try_load()? else {
            return Err(CliError::Validation(format!(
                "No config.yaml or config.json found in {}",
                site.config_dir().display()
            )));
        };
        let pages = select_pages(&document, self.slug.as_deref())?;

        let mut invalid = 0;
        for page in &pages {
            let report = validate_sections(site.registry(), &page.sections);
            output.highlight(&format!(
                "{} ({} sections, health {}%)",
                page.slug,
                report.total_sections,
                report.health_score()
            ));
            for detail in &report.details {
                print_section(&output, detail);
            }
            invalid += report.invalid_sections;

            if self.report {
                output.separator();
                output.print(&health_report(site.registry(), &page.sections));
            }
        }

        if invalid > 0 {
            return Err(CliError::Validation(format!(
                "{invalid} invalid section(s) found"
            )));
        }
        output.success(&format!("All sections valid across {} page(s)", pages.len()));
        Ok(())
    }
}

/// Every page, or just the page at `slug`.
fn select_pages(document: &ConfigDocument, slug: Option<&str>) -> Result<Vec<PageConfig>, CliError> {
    match slug {
        Some(slug) => document
            .page(slug)
            .map(|page| vec![page])
            .ok_or_else(|| CliError::Validation(format!("No page configured at {slug}"))),
        None => Ok(document.pages()),
    }
}

fn print_section(output: &Output, detail: &SectionReport) {
    let label = format!("[{}] {}", detail.index, detail.section_type);
    if detail.valid {
        output.success(&format!("  ✓ {label}"));
    } else {
        output.error(&format!("  ✗ {label}"));
    }
    for error in &detail.errors {
        output.error(&format!("      {error}"));
    }
    for warning in &detail.warnings {
        output.warning(&format!("      {warning}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> ConfigDocument {
        serde_json::from_value(serde_json::json!({
            "site": {"name": "Acme"},
            "pages": [
                {"slug": "/", "sections": []},
                {"slug": "/about", "sections": [{"type": "cta", "props": {}}]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_select_all_pages() {
        let pages = select_pages(&document(), None).unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_select_page_by_slug() {
        let pages = select_pages(&document(), Some("about")).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "/about");
    }

    #[test]
    fn test_select_unknown_slug() {
        let err = select_pages(&document(), Some("/nope")).unwrap_err();
        assert_eq!(err.to_string(), "No page configured at /nope");
    }
}
