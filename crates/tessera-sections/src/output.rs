//! Renderer output and error types.

/// Result of rendering one section.
///
/// # Example
///
/// ```
/// use tessera_sections::SectionOutput;
///
/// let output = SectionOutput::html("<section></section>");
/// assert!(!output.is_empty());
/// assert_eq!(SectionOutput::Empty.into_html(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionOutput {
    /// Markup for the section.
    Html(String),
    /// The section has nothing worth showing.
    Empty,
}

impl SectionOutput {
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Markup, or `None` for [`SectionOutput::Empty`].
    #[must_use]
    pub fn into_html(self) -> Option<String> {
        match self {
            Self::Html(html) => Some(html),
            Self::Empty => None,
        }
    }
}

/// Renderer fault. The dispatcher drops the section and logs this in
/// development mode.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid props: {0}")]
    InvalidProps(String),
    #[error("{0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html() {
        let output = SectionOutput::html("<p>x</p>");
        assert_eq!(output, SectionOutput::Html("<p>x</p>".to_owned()));
        assert_eq!(output.into_html().as_deref(), Some("<p>x</p>"));
    }

    #[test]
    fn test_empty() {
        assert!(SectionOutput::Empty.is_empty());
        assert!(!SectionOutput::html("").is_empty());
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::InvalidProps("items must be a list".to_owned());
        assert_eq!(err.to_string(), "invalid props: items must be a list");
    }
}
