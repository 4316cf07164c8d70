//! Section model and the closed set of built-in section kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::access::{as_string, field};

/// One entry of a page's ordered section list.
///
/// Deserialization never fails: a non-object entry becomes a section with an
/// empty type and `null` props, which the dispatcher skips and the validator
/// reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Section {
    /// Discriminator matched against the registry. Empty when absent.
    #[serde(rename = "type")]
    pub section_type: String,
    /// Optional anchor id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Untyped renderer props, `null` when absent.
    pub props: Value,
}

impl Section {
    /// Create a section from a type and props.
    #[must_use]
    pub fn new(section_type: impl Into<String>, props: Value) -> Self {
        Self {
            section_type: section_type.into(),
            id: None,
            props,
        }
    }

    /// Set the anchor id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The type string used for registry lookups, without surrounding
    /// whitespace.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.section_type.trim()
    }

    /// Built-in kind for this section's type, if any.
    #[must_use]
    pub fn kind(&self) -> Option<SectionKind> {
        self.type_name().parse().ok()
    }

    /// Anchor id, skipping blank values.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

impl From<Value> for Section {
    fn from(value: Value) -> Self {
        let id = as_string(field(&value, "id"), "");
        Self {
            section_type: as_string(field(&value, "type"), "").trim().to_owned(),
            id: (!id.trim().is_empty()).then_some(id),
            props: field(&value, "props").clone(),
        }
    }
}

/// Introspection grouping for registered sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Hero,
    Content,
    SocialProof,
    Conversion,
    Layout,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Content,
        Self::SocialProof,
        Self::Conversion,
        Self::Layout,
        Self::Other,
    ];

    /// Configuration spelling of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Content => "content",
            Self::SocialProof => "social-proof",
            Self::Conversion => "conversion",
            Self::Layout => "layout",
            Self::Other => "other",
        }
    }

    /// Heading used in generated documentation.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Content => "Content",
            Self::SocialProof => "Social-proof",
            Self::Conversion => "Conversion",
            Self::Layout => "Layout",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Built-in section kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Features,
    Stats,
    Team,
    Testimonials,
    Grid,
    Cta,
    Pricing,
    Faq,
    Contact,
    Gallery,
    LogoCloud,
    Content,
}

/// Static metadata for a built-in kind.
struct KindInfo {
    type_name: &'static str,
    display_name: &'static str,
    category: Category,
    description: &'static str,
}

impl SectionKind {
    /// Every built-in kind, in registration order.
    pub const ALL: [Self; 13] = [
        Self::Hero,
        Self::Features,
        Self::Content,
        Self::Grid,
        Self::Stats,
        Self::Testimonials,
        Self::Team,
        Self::LogoCloud,
        Self::Gallery,
        Self::Cta,
        Self::Pricing,
        Self::Contact,
        Self::Faq,
    ];

    const fn info(self) -> KindInfo {
        let (type_name, display_name, category, description) = match self {
            Self::Hero => (
                "hero",
                "Hero Section",
                Category::Hero,
                "Main landing section with headline, CTA, and image",
            ),
            Self::Features => (
                "features",
                "Features Section",
                Category::Content,
                "Display product/service features in grid or list",
            ),
            Self::Content => (
                "content",
                "Content Section",
                Category::Content,
                "Rich content with text, images, and videos",
            ),
            Self::Grid => (
                "grid",
                "Grid Section",
                Category::Layout,
                "Flexible grid layout for any content",
            ),
            Self::Stats => (
                "stats",
                "Stats Section",
                Category::SocialProof,
                "Display key metrics and statistics",
            ),
            Self::Testimonials => (
                "testimonials",
                "Testimonials Section",
                Category::SocialProof,
                "Customer testimonials and reviews",
            ),
            Self::Team => (
                "team",
                "Team Section",
                Category::SocialProof,
                "Team members showcase",
            ),
            Self::LogoCloud => (
                "logo-cloud",
                "Logo Cloud",
                Category::SocialProof,
                "Partner and client logos",
            ),
            Self::Gallery => (
                "gallery",
                "Gallery Section",
                Category::Content,
                "Image gallery with various layouts",
            ),
            Self::Cta => (
                "cta",
                "Call to Action",
                Category::Conversion,
                "Call-to-action section with buttons",
            ),
            Self::Pricing => (
                "pricing",
                "Pricing Section",
                Category::Conversion,
                "Pricing plans and tiers",
            ),
            Self::Contact => (
                "contact",
                "Contact Section",
                Category::Conversion,
                "Contact form and information",
            ),
            Self::Faq => (
                "faq",
                "FAQ Section",
                Category::Content,
                "Frequently asked questions",
            ),
        };
        KindInfo {
            type_name,
            display_name,
            category,
            description,
        }
    }

    /// Configuration `type` string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.info().type_name
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.info().display_name
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.info().category
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        self.info().description
    }

    /// Registry metadata for this kind.
    #[must_use]
    pub fn metadata(self) -> SectionMetadata {
        SectionMetadata {
            section_type: self.as_str().to_owned(),
            display_name: self.display_name().to_owned(),
            category: self.category(),
            description: Some(self.description().to_owned()),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type string names no built-in kind.
#[derive(Debug, thiserror::Error)]
#[error("unknown section type: {0}")]
pub struct UnknownSectionKind(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSectionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSectionKind(s.to_owned()))
    }
}

/// Introspection data stored next to each registered renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    #[serde(rename = "type")]
    pub section_type: String,
    pub display_name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SectionMetadata {
    /// Metadata for a custom section type.
    #[must_use]
    pub fn new(
        section_type: impl Into<String>,
        display_name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            section_type: section_type.into(),
            display_name: display_name.into(),
            category,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_section_from_value() {
        let section = Section::from(json!({
            "type": "hero",
            "id": "top",
            "props": {"title": "Hello"}
        }));
        assert_eq!(section.section_type, "hero");
        assert_eq!(section.id.as_deref(), Some("top"));
        assert_eq!(section.props, json!({"title": "Hello"}));
        assert_eq!(section.kind(), Some(SectionKind::Hero));
    }

    #[test]
    fn test_section_type_is_trimmed() {
        let section = Section::from(json!({"type": " faq ", "props": {}}));
        assert_eq!(section.section_type, "faq");
        assert_eq!(section.kind(), Some(SectionKind::Faq));
        assert_eq!(Section::new("hero\n", json!({})).type_name(), "hero");
    }

    #[test]
    fn test_section_from_non_object() {
        let section = Section::from(json!("hero"));
        assert_eq!(section, Section::default());
        assert_eq!(section.props, Value::Null);
    }

    #[test]
    fn test_section_blank_id_is_none() {
        let section = Section::from(json!({"type": "faq", "id": "  "}));
        assert_eq!(section.id, None);
        assert_eq!(section.anchor(), None);
    }

    #[test]
    fn test_section_deserializes_leniently() {
        let sections: Vec<Section> =
            serde_json::from_value(json!([{"type": "cta", "props": {"title": "Go"}}, 42, null]))
                .unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].kind(), Some(SectionKind::Cta));
        assert!(sections[1].section_type.is_empty());
        assert!(sections[2].section_type.is_empty());
    }

    #[test]
    fn test_section_serializes_type_key() {
        let value = serde_json::to_value(Section::new("faq", json!({"items": []}))).unwrap();
        assert_eq!(value, json!({"type": "faq", "props": {"items": []}}));
    }

    #[test]
    fn test_kind_round_trip_through_type_string() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
        }
        assert!("bogus-type".parse::<SectionKind>().is_err());
        assert!("Hero".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_kind_metadata() {
        let meta = SectionKind::LogoCloud.metadata();
        assert_eq!(meta.section_type, "logo-cloud");
        assert_eq!(meta.display_name, "Logo Cloud");
        assert_eq!(meta.category, Category::SocialProof);
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(
            serde_json::to_value(Category::SocialProof).unwrap(),
            json!("social-proof")
        );
        assert_eq!("layout".parse::<Category>().unwrap(), Category::Layout);
        assert!("misc".parse::<Category>().is_err());
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let value = serde_json::to_value(SectionKind::Cta.metadata()).unwrap();
        assert_eq!(value["type"], "cta");
        assert_eq!(value["displayName"], "Call to Action");
        assert_eq!(value["category"], "conversion");
    }
}
