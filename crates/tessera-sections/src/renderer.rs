//! Section renderer trait.

use crate::output::{RenderError, SectionOutput};
use crate::section::Section;

/// Turns one [`Section`] into markup.
///
/// Renderers are pure: the same section always yields the same output, and
/// no I/O happens while rendering. They are shared across threads through the
/// registry, hence `Send + Sync`.
///
/// Closures with the matching signature implement this trait, which is the
/// usual way to register a custom section type.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tessera_sections::{RenderError, Section, SectionOutput, SectionRenderer};
/// use tessera_sections::access::{as_string, field};
///
/// let banner = |section: &Section| -> Result<SectionOutput, RenderError> {
///     let text = as_string(field(&section.props, "text"), "");
///     Ok(SectionOutput::html(format!("<aside>{text}</aside>")))
/// };
///
/// let section = Section::new("banner", json!({"text": "Sale"}));
/// assert_eq!(banner.render(&section).unwrap(), SectionOutput::html("<aside>Sale</aside>"));
/// ```
pub trait SectionRenderer: Send + Sync {
    /// Render the section or report that it has nothing to show.
    fn render(&self, section: &Section) -> Result<SectionOutput, RenderError>;

    /// Warnings about content that will be dropped or ignored.
    ///
    /// Used by validation only; rendering never consults it.
    fn lint(&self, _section: &Section) -> Vec<String> {
        Vec::new()
    }
}

impl<F> SectionRenderer for F
where
    F: Fn(&Section) -> Result<SectionOutput, RenderError> + Send + Sync,
{
    fn render(&self, section: &Section) -> Result<SectionOutput, RenderError> {
        self(section)
    }
}
