//! `tessera sections` command implementation.

use clap::Args;
use tessera_sections::{Category, SectionRegistry, default_registry, registry_docs};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Print Markdown documentation instead of a listing.
    #[arg(long)]
    markdown: bool,

    /// Only list section types in this category.
    #[arg(long, conflicts_with = "markdown")]
    category: Option<Category>,
}

impl SectionsArgs {
    /// Execute the sections command.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let registry = default_registry();

        if self.markdown {
            output.print(&registry_docs(registry));
            return Ok(());
        }

        let categories = match self.category {
            Some(category) => vec![category],
            None => Category::ALL.to_vec(),
        };
        for line in listing(registry, &categories) {
            output.print(&line);
        }
        Ok(())
    }
}

/// One heading per non-empty category followed by its section types.
fn listing(registry: &SectionRegistry, categories: &[Category]) -> Vec<String> {
    let mut lines = Vec::new();
    for &category in categories {
        let sections = registry.by_category(category);
        if sections.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{}:", category.title()));
        for metadata in sections {
            let mut line = format!("  {:<14} {}", metadata.section_type, metadata.display_name);
            if let Some(description) = &metadata.description {
                line.push_str(" - ");
                line.push_str(description);
            }
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_single_category() {
        let lines = listing(default_registry(), &[Category::Hero]);
        assert_eq!(
            lines,
            vec![
                "Hero:".to_owned(),
                "  hero           Hero Section - Main landing section with headline, CTA, and image"
                    .to_owned(),
            ]
        );
    }

    #[test]
    fn test_listing_skips_empty_categories() {
        let lines = listing(default_registry(), &Category::ALL);
        assert!(!lines.iter().any(|line| line == "Other:"));
        assert_eq!(lines.iter().filter(|line| line.starts_with("  ")).count(), 13);
    }
}
