//! Component dispatcher.
//!
//! Renders a page's ordered section list through a [`SectionRegistry`]. Each
//! section is isolated: a section that fails the render gate, names an
//! unknown type, renders nothing, returns an error or panics is dropped and
//! the remaining sections render as usual. Diagnostics are collected and
//! logged only in [`RenderMode::Development`] and never change the output.

use std::cell::Cell;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::str::FromStr;
use std::sync::Once;

use serde::{Deserialize, Serialize};

use crate::access::can_render_section;
use crate::output::SectionOutput;
use crate::registry::SectionRegistry;
use crate::section::Section;

/// Whether diagnostics are surfaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Development,
    #[default]
    Production,
}

impl RenderMode {
    #[must_use]
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown render mode.
#[derive(Debug, thiserror::Error)]
#[error("unknown render mode: {0} (expected development or production)")]
pub struct UnknownRenderMode(pub String);

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(UnknownRenderMode(s.to_owned())),
        }
    }
}

/// Why a section was dropped from the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// No renderer is registered for the type.
    UnknownType {
        index: usize,
        section_type: String,
        available: Vec<String>,
    },
    /// The renderer found nothing worth showing.
    InsufficientContent { index: usize, section_type: String },
    /// The renderer returned an error.
    RenderFailed {
        index: usize,
        section_type: String,
        message: String,
    },
    /// The renderer panicked.
    Panicked {
        index: usize,
        section_type: String,
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType {
                index,
                section_type,
                available,
            } => write!(
                f,
                "section {index}: unknown section type \"{section_type}\" (available: {})",
                available.join(", ")
            ),
            Self::InsufficientContent {
                index,
                section_type,
            } => write!(
                f,
                "section {index}: {section_type} has insufficient content and was skipped"
            ),
            Self::RenderFailed {
                index,
                section_type,
                message,
            } => write!(f, "section {index}: error rendering {section_type}: {message}"),
            Self::Panicked {
                index,
                section_type,
                message,
            } => write!(f, "section {index}: {section_type} renderer panicked: {message}"),
        }
    }
}

/// One section that produced markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSection {
    /// Position in the source list.
    pub index: usize,
    pub section_type: String,
    pub html: String,
}

/// Result of dispatching a section list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatched {
    /// Rendered sections in source order, without gaps.
    pub sections: Vec<RenderedSection>,
    /// Development-mode diagnostics. Always empty in production.
    pub diagnostics: Vec<Diagnostic>,
}

impl Dispatched {
    /// Concatenated markup of all rendered sections.
    #[must_use]
    pub fn html(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.html.as_str())
            .collect()
    }
}

/// Renders section lists through a registry.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tessera_sections::{Dispatcher, RenderMode, Section, default_registry};
///
/// let sections = vec![
///     Section::from(json!({"type": "faq", "props": {"items": [{"question": "Q1", "answer": "A1"}]}})),
///     Section::from(json!({"type": "bogus-type", "props": {"title": "x"}})),
/// ];
///
/// let dispatched = Dispatcher::new(default_registry(), RenderMode::Production).render(&sections);
/// assert_eq!(dispatched.sections.len(), 1);
/// assert!(dispatched.diagnostics.is_empty());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'r> {
    registry: &'r SectionRegistry,
    mode: RenderMode,
}

impl<'r> Dispatcher<'r> {
    #[must_use]
    pub fn new(registry: &'r SectionRegistry, mode: RenderMode) -> Self {
        Self { registry, mode }
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render every section in order, dropping the ones that cannot render.
    #[must_use]
    pub fn render(&self, sections: &[Section]) -> Dispatched {
        let mut dispatched = Dispatched::default();
        for (index, section) in sections.iter().enumerate() {
            match self.render_one(index, section) {
                Ok(Some(html)) => dispatched.sections.push(RenderedSection {
                    index,
                    section_type: section.type_name().to_owned(),
                    html,
                }),
                Ok(None) => {}
                Err(diagnostic) => {
                    if self.mode.is_development() {
                        tracing::warn!(
                            index,
                            section_type = section.type_name(),
                            "{diagnostic}"
                        );
                        dispatched.diagnostics.push(diagnostic);
                    }
                }
            }
        }
        dispatched
    }

    /// Render one section. `Ok(None)` means the section was dropped without
    /// anything worth reporting.
    fn render_one(&self, index: usize, section: &Section) -> Result<Option<String>, Diagnostic> {
        if !can_render_section(section) {
            return Ok(None);
        }

        let section_type = section.type_name();
        let Some(renderer) = self.registry.resolve(section_type) else {
            return Err(Diagnostic::UnknownType {
                index,
                section_type: section_type.to_owned(),
                available: self
                    .registry
                    .types()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            });
        };

        install_quiet_panic_hook();
        let result = {
            let _guard = RendererScope::enter();
            catch_unwind(AssertUnwindSafe(|| renderer.render(section)))
        };
        match result {
            Ok(Ok(SectionOutput::Html(html))) => Ok(Some(html)),
            Ok(Ok(SectionOutput::Empty)) => Err(Diagnostic::InsufficientContent {
                index,
                section_type: section_type.to_owned(),
            }),
            Ok(Err(e)) => Err(Diagnostic::RenderFailed {
                index,
                section_type: section_type.to_owned(),
                message: e.to_string(),
            }),
            Err(payload) => Err(Diagnostic::Panicked {
                index,
                section_type: section_type.to_owned(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

thread_local! {
    static IN_RENDERER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANIC_HOOK: Once = Once::new();

/// Wrap the process panic hook so panics raised inside a renderer are not
/// printed. Their payload still reaches the dispatcher, which reports it as a
/// development diagnostic. Panics anywhere else go to the previous hook.
fn install_quiet_panic_hook() {
    QUIET_PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !IN_RENDERER.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Marks the current thread as running a renderer until dropped, including
/// during unwinding.
struct RendererScope {
    previous: bool,
}

impl RendererScope {
    fn enter() -> Self {
        Self {
            previous: IN_RENDERER.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for RendererScope {
    fn drop(&mut self) {
        IN_RENDERER.with(|flag| flag.set(self.previous));
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RenderError;
    use crate::registry::{SectionOptions, default_registry};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn sections(values: Value) -> Vec<Section> {
        serde_json::from_value(values).unwrap()
    }

    fn faq(question: &str) -> Value {
        json!({"type": "faq", "props": {"items": [{"question": question, "answer": "A"}]}})
    }

    fn registry_with_faulty_renderers() -> SectionRegistry {
        SectionRegistry::builtin()
            .with_section(
                "broken",
                |_: &Section| -> Result<SectionOutput, RenderError> {
                    Err(RenderError::Failed("boom".to_owned()))
                },
                SectionOptions::new("Broken"),
            )
            .with_section(
                "panicky",
                |_: &Section| -> Result<SectionOutput, RenderError> {
                    panic!("renderer exploded")
                },
                SectionOptions::new("Panicky"),
            )
    }

    #[test]
    fn test_scenario_unknown_type_is_skipped() {
        let input = sections(json!([{"type": "bogus-type", "props": {"title": "x"}}]));

        let production = Dispatcher::new(default_registry(), RenderMode::Production).render(&input);
        assert_eq!(production, Dispatched::default());

        let development =
            Dispatcher::new(default_registry(), RenderMode::Development).render(&input);
        assert!(development.sections.is_empty());
        assert_eq!(development.diagnostics.len(), 1);
        match &development.diagnostics[0] {
            Diagnostic::UnknownType {
                section_type,
                available,
                ..
            } => {
                assert_eq!(section_type, "bogus-type");
                assert_eq!(available.len(), 13);
                assert!(available.contains(&"faq".to_owned()));
            }
            other => panic!("unexpected diagnostic: {other:?}"),
        }
    }

    #[test]
    fn test_scenario_empty_pricing_between_sections() {
        let input = sections(json!([
            faq("first"),
            {"type": "pricing", "props": {}},
            {"type": "cta", "props": {"title": "third"}}
        ]));
        let dispatched = Dispatcher::new(default_registry(), RenderMode::Production).render(&input);

        let indices: Vec<_> = dispatched.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
        let html = dispatched.html();
        assert!(html.find("first").unwrap() < html.find("third").unwrap());
    }

    #[test]
    fn test_gate_failures_are_silent_in_every_mode() {
        let input = sections(json!([
            {"props": {"title": "no type"}},
            {"type": "hero"},
            {"type": "hero", "props": {}},
            {"type": "hero", "props": "text"},
            null
        ]));
        for mode in [RenderMode::Development, RenderMode::Production] {
            let dispatched = Dispatcher::new(default_registry(), mode).render(&input);
            assert_eq!(dispatched, Dispatched::default(), "{mode}");
        }
    }

    #[test]
    fn test_renderer_error_and_panic_are_isolated() {
        let registry = registry_with_faulty_renderers();
        let input = sections(json!([
            faq("before"),
            {"type": "broken", "props": {"a": 1}},
            {"type": "panicky", "props": {"a": 1}},
            faq("after")
        ]));

        let dispatched = Dispatcher::new(&registry, RenderMode::Development).render(&input);
        let indices: Vec<_> = dispatched.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(
            dispatched.diagnostics,
            vec![
                Diagnostic::RenderFailed {
                    index: 1,
                    section_type: "broken".to_owned(),
                    message: "boom".to_owned(),
                },
                Diagnostic::Panicked {
                    index: 2,
                    section_type: "panicky".to_owned(),
                    message: "renderer exploded".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_faulty_sections_render_like_removed_ones() {
        let registry = registry_with_faulty_renderers();
        let with_faults = sections(json!([
            faq("a"),
            {"type": "panicky", "props": {"a": 1}},
            faq("b"),
            {"type": "broken", "props": {"a": 1}},
            faq("c")
        ]));
        let without_faults = sections(json!([faq("a"), faq("b"), faq("c")]));

        for mode in [RenderMode::Development, RenderMode::Production] {
            let dispatcher = Dispatcher::new(&registry, mode);
            assert_eq!(
                dispatcher.render(&with_faults).html(),
                dispatcher.render(&without_faults).html(),
                "{mode}"
            );
        }
    }

    #[test]
    fn test_renderer_panics_are_kept_off_stderr() {
        let registry = registry_with_faulty_renderers().with_section(
            "scope",
            |_: &Section| -> Result<SectionOutput, RenderError> {
                Ok(SectionOutput::html(IN_RENDERER.with(Cell::get).to_string()))
            },
            SectionOptions::new("Scope"),
        );
        let input = sections(json!([
            {"type": "panicky", "props": {"a": 1}},
            {"type": "scope", "props": {"a": 1}}
        ]));

        let dispatched = Dispatcher::new(&registry, RenderMode::Production).render(&input);
        assert!(QUIET_PANIC_HOOK.is_completed());
        assert_eq!(dispatched.html(), "true");
        assert!(dispatched.diagnostics.is_empty());
        assert!(!IN_RENDERER.with(Cell::get));
    }

    #[test]
    fn test_diagnostics_never_change_output() {
        let registry = registry_with_faulty_renderers();
        let input = sections(json!([
            faq("one"),
            {"type": "bogus", "props": {"a": 1}},
            {"type": "broken", "props": {"a": 1}},
            {"type": "features", "props": {"items": []}},
            faq("two")
        ]));
        let development = Dispatcher::new(&registry, RenderMode::Development).render(&input);
        let production = Dispatcher::new(&registry, RenderMode::Production).render(&input);
        assert_eq!(development.sections, production.sections);
        assert!(production.diagnostics.is_empty());
        assert_eq!(development.diagnostics.len(), 3);
    }

    #[test]
    fn test_order_preserved_for_renderable_subsequence() {
        let input = sections(json!([
            faq("q0"),
            {"type": "unknown", "props": {"x": 1}},
            faq("q2"),
            {"type": "stats", "props": {"items": [{"label": "L", "value": 1}]}},
            {"type": "faq", "props": {"items": []}},
            faq("q5")
        ]));
        let dispatched = Dispatcher::new(default_registry(), RenderMode::Production).render(&input);
        let indices: Vec<_> = dispatched.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2, 3, 5]);
    }

    #[test]
    fn test_render_mode_parse() {
        assert_eq!("development".parse::<RenderMode>().unwrap(), RenderMode::Development);
        assert_eq!("PROD".parse::<RenderMode>().unwrap(), RenderMode::Production);
        assert!("staging".parse::<RenderMode>().is_err());
        assert_eq!(RenderMode::default(), RenderMode::Production);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::UnknownType {
            index: 1,
            section_type: "bogus".to_owned(),
            available: vec!["hero".to_owned(), "faq".to_owned()],
        };
        assert_eq!(
            diagnostic.to_string(),
            "section 1: unknown section type \"bogus\" (available: hero, faq)"
        );
    }
}
