//! Section registry.
//!
//! Maps a section `type` string to its renderer and introspection metadata.
//! A registry is built by value (registering is `&mut self`) and then shared
//! immutably, either through [`default_registry`] or behind an `Arc`, so
//! lookups never need a lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::render::BuiltinRenderer;
use crate::renderer::SectionRenderer;
use crate::section::{Category, Section, SectionKind, SectionMetadata};

static DEFAULT_REGISTRY: LazyLock<SectionRegistry> = LazyLock::new(SectionRegistry::builtin);

/// Process-wide registry holding the built-in section kinds.
///
/// Built on first use and read-only afterwards.
#[must_use]
pub fn default_registry() -> &'static SectionRegistry {
    &DEFAULT_REGISTRY
}

/// Display data supplied when registering a section type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionOptions {
    pub display_name: String,
    pub category: Category,
    pub description: Option<String>,
}

impl SectionOptions {
    /// Options with the `other` category and no description.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            category: Category::Other,
            description: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<SectionKind> for SectionOptions {
    fn from(kind: SectionKind) -> Self {
        Self::new(kind.display_name())
            .category(kind.category())
            .description(kind.description())
    }
}

struct Entry {
    metadata: SectionMetadata,
    renderer: Box<dyn SectionRenderer>,
}

/// Dispatch table from section type to renderer.
///
/// Introspection methods return entries in registration order. Re-registering
/// a type replaces its renderer and metadata but keeps its position.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tessera_sections::{Category, RenderError, Section, SectionOptions, SectionOutput, SectionRegistry};
///
/// let mut registry = SectionRegistry::builtin();
/// registry.register(
///     "banner",
///     |_: &Section| -> Result<SectionOutput, RenderError> { Ok(SectionOutput::html("<aside></aside>")) },
///     SectionOptions::new("Banner").category(Category::Layout),
/// );
///
/// assert!(registry.resolve("banner").is_some());
/// assert!(registry.resolve("bogus-type").is_none());
/// assert_eq!(registry.len(), 14);
/// ```
#[derive(Default)]
pub struct SectionRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl SectionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in section kind.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in SectionKind::ALL {
            registry.register(kind.as_str(), BuiltinRenderer::new(kind), kind.into());
        }
        registry
    }

    /// Register a renderer for `section_type`. The last registration wins.
    pub fn register<R>(
        &mut self,
        section_type: impl Into<String>,
        renderer: R,
        options: SectionOptions,
    ) -> &mut Self
    where
        R: SectionRenderer + 'static,
    {
        let section_type = section_type.into();
        let entry = Entry {
            metadata: SectionMetadata {
                section_type: section_type.clone(),
                display_name: options.display_name,
                category: options.category,
                description: options.description,
            },
            renderer: Box::new(renderer),
        };

        if let Some(&position) = self.index.get(&section_type) {
            tracing::debug!(section_type = %section_type, "Replacing registered section renderer");
            self.entries[position] = entry;
        } else {
            self.index.insert(section_type, self.entries.len());
            self.entries.push(entry);
        }
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_section<R>(
        mut self,
        section_type: impl Into<String>,
        renderer: R,
        options: SectionOptions,
    ) -> Self
    where
        R: SectionRenderer + 'static,
    {
        self.register(section_type, renderer, options);
        self
    }

    /// Freeze the registry for sharing across threads.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn entry(&self, section_type: &str) -> Option<&Entry> {
        self.index
            .get(section_type)
            .and_then(|&position| self.entries.get(position))
    }

    /// Renderer for `section_type`. Absence is a normal outcome.
    #[must_use]
    pub fn resolve(&self, section_type: &str) -> Option<&dyn SectionRenderer> {
        self.entry(section_type).map(|entry| entry.renderer.as_ref())
    }

    #[must_use]
    pub fn contains(&self, section_type: &str) -> bool {
        self.index.contains_key(section_type)
    }

    /// Registered type strings.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.metadata.section_type.as_str())
            .collect()
    }

    /// Metadata of every registered type.
    #[must_use]
    pub fn metadata(&self) -> Vec<&SectionMetadata> {
        self.entries.iter().map(|entry| &entry.metadata).collect()
    }

    /// Metadata of one registered type.
    #[must_use]
    pub fn metadata_for(&self, section_type: &str) -> Option<&SectionMetadata> {
        self.entry(section_type).map(|entry| &entry.metadata)
    }

    /// Metadata of the types registered under `category`.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&SectionMetadata> {
        self.entries
            .iter()
            .map(|entry| &entry.metadata)
            .filter(|metadata| metadata.category == category)
            .collect()
    }

    /// Lint a section with its registered renderer. Unknown types yield no
    /// warnings here; the validator reports them as errors.
    #[must_use]
    pub fn lint(&self, section: &Section) -> Vec<String> {
        self.resolve(section.type_name())
            .map(|renderer| renderer.lint(section))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("types", &self.types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{RenderError, SectionOutput};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SectionRegistry: Send, Sync);
    assert_impl_all!(BuiltinRenderer: Send, Sync);

    fn fixed(html: &'static str) -> impl SectionRenderer {
        move |_: &Section| -> Result<SectionOutput, RenderError> { Ok(SectionOutput::html(html)) }
    }

    #[test]
    fn test_builtin_registers_all_kinds() {
        let registry = SectionRegistry::builtin();
        assert_eq!(registry.len(), 13);
        assert_eq!(
            registry.types(),
            vec![
                "hero",
                "features",
                "content",
                "grid",
                "stats",
                "testimonials",
                "team",
                "logo-cloud",
                "gallery",
                "cta",
                "pricing",
                "contact",
                "faq",
            ]
        );
    }

    #[test]
    fn test_registry_closure() {
        let registry = SectionRegistry::builtin();
        for section_type in registry.types() {
            assert!(registry.resolve(section_type).is_some(), "{section_type}");
        }
        for unknown in ["", "bogus-type", "Hero", "hero ", "logo_cloud"] {
            assert!(registry.resolve(unknown).is_none(), "{unknown}");
        }
    }

    #[test]
    fn test_register_is_upsert() {
        let mut registry = SectionRegistry::new();
        registry
            .register("a", fixed("first"), SectionOptions::new("A"))
            .register("b", fixed("b"), SectionOptions::new("B"))
            .register(
                "a",
                fixed("second"),
                SectionOptions::new("A2").category(Category::Layout),
            );

        assert_eq!(registry.types(), vec!["a", "b"]);
        let section = Section::new("a", json!({"x": 1}));
        let output = registry.resolve("a").unwrap().render(&section).unwrap();
        assert_eq!(output, SectionOutput::html("second"));
        assert_eq!(registry.metadata_for("a").unwrap().display_name, "A2");
    }

    #[test]
    fn test_by_category() {
        let registry = SectionRegistry::builtin();
        let social: Vec<_> = registry
            .by_category(Category::SocialProof)
            .into_iter()
            .map(|m| m.section_type.as_str())
            .collect();
        assert_eq!(social, vec!["stats", "testimonials", "team", "logo-cloud"]);
        assert!(registry.by_category(Category::Other).is_empty());
    }

    #[test]
    fn test_metadata_order_and_content() {
        let registry = SectionRegistry::builtin();
        let metadata = registry.metadata();
        assert_eq!(metadata.len(), 13);
        assert_eq!(metadata[0], &SectionKind::Hero.metadata());
    }

    #[test]
    fn test_default_registry_is_builtin() {
        let registry = default_registry();
        assert_eq!(registry.len(), SectionKind::ALL.len());
        assert!(std::ptr::eq(registry, default_registry()));
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = SectionRegistry::builtin()
            .with_section("custom", fixed("<p>c</p>"), SectionOptions::new("Custom"))
            .into_shared();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.contains("custom") && registry.contains("faq"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_lint_unknown_type_is_silent() {
        let registry = SectionRegistry::builtin();
        assert!(registry.lint(&Section::new("bogus", json!({"a": 1}))).is_empty());
    }
}
