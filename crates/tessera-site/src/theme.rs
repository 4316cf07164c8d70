//! Theme color tokens and their CSS custom properties.

use crate::document::ThemeConfig;

const DEFAULT_PRIMARY: &str = "#000000";
const DEFAULT_SECONDARY: &str = "#666666";
const DEFAULT_ACCENT: &str = "#0066cc";

/// Theme with every token resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_owned(),
            secondary: DEFAULT_SECONDARY.to_owned(),
            accent: DEFAULT_ACCENT.to_owned(),
        }
    }
}

impl Theme {
    /// Merge configured tokens over the defaults. Blank values keep the
    /// default.
    #[must_use]
    pub fn from_config(config: Option<&ThemeConfig>) -> Self {
        let pick = |value: Option<&String>, default: &str| {
            value
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        let config = config.cloned().unwrap_or_default();
        Self {
            primary: pick(config.primary.as_ref(), DEFAULT_PRIMARY),
            secondary: pick(config.secondary.as_ref(), DEFAULT_SECONDARY),
            accent: pick(config.accent.as_ref(), DEFAULT_ACCENT),
        }
    }

    /// CSS custom property declarations for a `style` attribute.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-accent: {};",
            self.primary, self.secondary, self.accent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::from_config(None), Theme::default());
        assert_eq!(
            Theme::default().css_vars(),
            "--color-primary: #000000; --color-secondary: #666666; --color-accent: #0066cc;"
        );
    }

    #[test]
    fn test_partial_override() {
        let config = ThemeConfig {
            primary: Some("#ff0000".to_owned()),
            secondary: Some("  ".to_owned()),
            accent: None,
        };
        let theme = Theme::from_config(Some(&config));
        assert_eq!(theme.primary, "#ff0000");
        assert_eq!(theme.secondary, DEFAULT_SECONDARY);
        assert_eq!(theme.accent, DEFAULT_ACCENT);
    }
}
