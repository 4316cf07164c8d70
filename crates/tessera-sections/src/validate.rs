//! Section list validation and introspection reports.
//!
//! These run at authoring time (CLI `validate`, the development API) and
//! never on the page rendering path.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::registry::SectionRegistry;
use crate::section::{Category, Section, SectionMetadata};

/// Type label used for sections that declare none.
const UNKNOWN_TYPE: &str = "unknown";

/// Validation outcome for one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub index: usize,
    #[serde(rename = "type")]
    pub section_type: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validation outcome for a section list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub total_sections: usize,
    pub valid_sections: usize,
    pub invalid_sections: usize,
    pub details: Vec<SectionReport>,
}

impl ValidationReport {
    /// Reports of the invalid sections only.
    pub fn invalid(&self) -> impl Iterator<Item = &SectionReport> {
        self.details.iter().filter(|detail| !detail.valid)
    }

    /// Share of valid sections as a rounded percentage. An empty list is
    /// fully healthy.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn health_score(&self) -> u32 {
        if self.total_sections == 0 {
            return 100;
        }
        let ratio = self.valid_sections as f64 / self.total_sections as f64;
        (ratio * 100.0).round() as u32
    }
}

/// Validate one section against the registry.
///
/// A section is invalid when its type is missing or unregistered, or when its
/// props are not an object. Warnings carry the renderer's lint output and,
/// for unknown types, the registered alternatives.
#[must_use]
pub fn validate_section(registry: &SectionRegistry, index: usize, section: &Section) -> SectionReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let section_type = section.type_name();

    if section_type.is_empty() {
        errors.push("Section type is required".to_owned());
    } else if !registry.contains(section_type) {
        errors.push(format!("Unknown section type: \"{section_type}\""));
        warnings.push(format!("Available types: {}", registry.types().join(", ")));
    }

    if section.props.is_object() {
        warnings.extend(registry.lint(section));
    } else {
        errors.push("Section props must be an object".to_owned());
    }

    SectionReport {
        index,
        section_type: if section_type.is_empty() {
            UNKNOWN_TYPE.to_owned()
        } else {
            section_type.to_owned()
        },
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Validate a page's section list.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tessera_sections::{Section, default_registry, validate_sections};
///
/// let sections = vec![
///     Section::from(json!({"type": "hero", "props": {"title": "Hi"}})),
///     Section::from(json!({"type": "nope", "props": {}})),
/// ];
/// let report = validate_sections(default_registry(), &sections);
/// assert_eq!(report.valid_sections, 1);
/// assert_eq!(report.invalid_sections, 1);
/// ```
#[must_use]
pub fn validate_sections(registry: &SectionRegistry, sections: &[Section]) -> ValidationReport {
    let details: Vec<_> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| validate_section(registry, index, section))
        .collect();
    let valid_sections = details.iter().filter(|detail| detail.valid).count();

    ValidationReport {
        valid: valid_sections == sections.len(),
        total_sections: sections.len(),
        valid_sections,
        invalid_sections: sections.len() - valid_sections,
        details,
    }
}

/// How often section types and prop keys appear in a section list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageAnalysis {
    pub section_types: BTreeMap<String, usize>,
    pub total_props: usize,
    pub common_props: BTreeMap<String, usize>,
}

impl UsageAnalysis {
    /// The `limit` most used prop keys, most used first. Ties keep key order.
    #[must_use]
    pub fn top_props(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut props: Vec<_> = self
            .common_props
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        props.sort_by(|a, b| b.1.cmp(&a.1));
        props.truncate(limit);
        props
    }
}

/// Count section types and prop keys.
#[must_use]
pub fn analyze_usage(sections: &[Section]) -> UsageAnalysis {
    let mut usage = UsageAnalysis::default();
    for section in sections {
        let section_type = match section.type_name() {
            "" => UNKNOWN_TYPE,
            other => other,
        };
        *usage
            .section_types
            .entry(section_type.to_owned())
            .or_default() += 1;

        if let Some(props) = section.props.as_object() {
            usage.total_props += props.len();
            for key in props.keys() {
                *usage.common_props.entry(key.clone()).or_default() += 1;
            }
        }
    }
    usage
}

/// Markdown health report for a section list.
#[must_use]
pub fn health_report(registry: &SectionRegistry, sections: &[Section]) -> String {
    let validation = validate_sections(registry, sections);
    let usage = analyze_usage(sections);

    let mut report = String::from("# Config Health Report\n\n## Overview\n");
    let _ = writeln!(report, "- Total Sections: {}", validation.total_sections);
    let _ = writeln!(report, "- Valid Sections: {}", validation.valid_sections);
    let _ = writeln!(report, "- Invalid Sections: {}", validation.invalid_sections);
    let _ = writeln!(report, "- Health Score: {}%", validation.health_score());

    report.push_str("\n## Section Types Usage\n");
    for (section_type, count) in &usage.section_types {
        let _ = writeln!(report, "- {section_type}: {count}");
    }

    report.push_str("\n## Common Props\n");
    for (prop, count) in usage.top_props(10) {
        let _ = writeln!(report, "- {prop}: used {count} times");
    }

    if validation.invalid_sections > 0 {
        report.push_str("\n## Issues Found\n");
        for detail in validation.invalid() {
            let _ = writeln!(report, "\n### Section {} ({})", detail.index, detail.section_type);
            for error in &detail.errors {
                let _ = writeln!(report, "- ❌ {error}");
            }
            for warning in &detail.warnings {
                let _ = writeln!(report, "- ⚠️ {warning}");
            }
        }
    }

    report
}

/// Registry introspection payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryReport {
    pub total: usize,
    pub sections: Vec<SectionMetadata>,
    pub by_category: BTreeMap<Category, Vec<SectionMetadata>>,
    pub types: Vec<String>,
}

impl RegistryReport {
    #[must_use]
    pub fn new(registry: &SectionRegistry) -> Self {
        let sections: Vec<SectionMetadata> = registry.metadata().into_iter().cloned().collect();
        let mut by_category: BTreeMap<Category, Vec<SectionMetadata>> = BTreeMap::new();
        for metadata in &sections {
            by_category
                .entry(metadata.category)
                .or_default()
                .push(metadata.clone());
        }

        Self {
            total: sections.len(),
            types: sections
                .iter()
                .map(|metadata| metadata.section_type.clone())
                .collect(),
            by_category,
            sections,
        }
    }
}

/// Markdown documentation of the registered sections, grouped by category.
#[must_use]
pub fn registry_docs(registry: &SectionRegistry) -> String {
    let mut docs = String::from("# Available Sections\n\n");
    for category in Category::ALL {
        let sections = registry.by_category(category);
        if sections.is_empty() {
            continue;
        }
        let _ = writeln!(docs, "## {}\n", category.title());
        for metadata in sections {
            let _ = writeln!(docs, "### {}", metadata.section_type);
            let _ = writeln!(docs, "**Display Name:** {}", metadata.display_name);
            if let Some(description) = &metadata.description {
                let _ = writeln!(docs, "**Description:** {description}");
            }
            docs.push('\n');
        }
    }
    docs
}
