//! Section registry and rendering pipeline for Tessera.
//!
//! This crate provides:
//! - [`access`]: total accessors over untyped `serde_json::Value` props
//! - [`SectionRegistry`]: dispatch table from section `type` to renderer
//! - Built-in renderers for the thirteen [`SectionKind`]s
//! - [`Dispatcher`]: renders a page's section list with per-section isolation
//! - Validation, usage analysis and registry reports for authoring tools
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use tessera_sections::{Dispatcher, RenderMode, Section, default_registry};
//!
//! let sections: Vec<Section> = serde_json::from_value(json!([
//!     {"type": "hero", "props": {"title": "Build faster"}},
//!     {"type": "faq", "props": {"items": []}},
//! ]))
//! .unwrap();
//!
//! let page = Dispatcher::new(default_registry(), RenderMode::Production).render(&sections);
//! assert_eq!(page.sections.len(), 1);
//! assert!(page.html().contains("Build faster"));
//! ```

pub mod access;
mod dispatch;
pub mod html;
mod output;
mod registry;
mod render;
mod renderer;
mod section;
mod validate;

pub use dispatch::{
    Diagnostic, Dispatched, Dispatcher, RenderMode, RenderedSection, UnknownRenderMode,
};
pub use output::{RenderError, SectionOutput};
pub use registry::{SectionOptions, SectionRegistry, default_registry};
pub use render::BuiltinRenderer;
pub use renderer::SectionRenderer;
pub use section::{
    Category, Section, SectionKind, SectionMetadata, UnknownCategory, UnknownSectionKind,
};
pub use validate::{
    RegistryReport, SectionReport, UsageAnalysis, ValidationReport, analyze_usage, health_report,
    registry_docs, validate_section, validate_sections,
};
