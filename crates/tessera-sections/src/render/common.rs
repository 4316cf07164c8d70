//! Pieces shared by several renderers: headers, buttons, images, columns.

use serde_json::Value;

use super::Lint;
use crate::access::{as_array, as_string, as_text, as_u64, field, has_content};
use crate::html;

/// Title and subtitle shown above a section's content.
#[derive(Debug, Default)]
pub(crate) struct Header {
    pub title: String,
    pub subtitle: String,
}

impl Header {
    /// Read `title` and the first of `subtitle_keys` that has content.
    pub(crate) fn extract(props: &Value, subtitle_keys: &[&str]) -> Self {
        let subtitle = subtitle_keys
            .iter()
            .map(|key| field(props, key))
            .find(|value| has_content(value))
            .map(|value| as_string(value, ""))
            .unwrap_or_default();
        Self {
            title: as_string(field(props, "title"), ""),
            subtitle,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.subtitle.trim().is_empty()
    }

    pub(crate) fn write(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        html::open(out, "header", "section__header", &[]);
        html::element(out, "h2", "section__title", &self.title);
        html::element(out, "p", "section__subtitle", &self.subtitle);
        html::close(out, "header");
    }
}

/// Call-to-action link.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Button {
    pub text: String,
    pub href: String,
    pub variant: String,
}

impl Button {
    /// Build a button from an object with `text`, `href` and `variant`.
    /// Returns `None` when there is no text.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let text = as_string(field(value, "text"), "");
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            href: as_text(field(value, "href"), "#"),
            variant: as_text(field(value, "variant"), "primary"),
        })
    }

    /// Buttons from the list at `key`, dropping entries without text.
    pub(crate) fn list(props: &Value, key: &str, lint: &mut Lint) -> Vec<Self> {
        as_array(field(props, key))
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let button = Self::from_value(value);
                if button.is_none() {
                    lint.dropped(key, index, "text");
                }
                button
            })
            .collect()
    }

    pub(crate) fn write(&self, out: &mut String) {
        let class = format!("button button--{}", self.variant);
        html::link(out, &self.href, &class, &self.text);
    }
}

/// Write a row of buttons, or nothing for an empty list.
pub(crate) fn write_buttons(out: &mut String, buttons: &[Button]) {
    if buttons.is_empty() {
        return;
    }
    html::open(out, "div", "section__actions", &[]);
    for button in buttons {
        button.write(out);
    }
    html::close(out, "div");
}

/// Image given either as a bare source string or an object.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    /// Accept a string, or an object with the first of `src`, `url` or
    /// `image` as source. Returns `None` without a source.
    pub(crate) fn from_value(value: &Value, default_alt: &str) -> Option<Self> {
        let (src, alt) = match value {
            Value::String(src) => (src.clone(), String::new()),
            Value::Object(_) => {
                let src = ["src", "url", "image"]
                    .iter()
                    .map(|key| as_string(field(value, key), ""))
                    .find(|src| !src.trim().is_empty())
                    .unwrap_or_default();
                let alt = ["alt", "name"]
                    .iter()
                    .map(|key| as_string(field(value, key), ""))
                    .find(|alt| !alt.trim().is_empty())
                    .unwrap_or_default();
                (src, alt)
            }
            _ => return None,
        };
        if src.trim().is_empty() {
            return None;
        }
        let alt = if alt.trim().is_empty() {
            default_alt.to_owned()
        } else {
            alt
        };
        Some(Self { src, alt })
    }

    pub(crate) fn write(&self, out: &mut String, class: &str) {
        html::image(out, &self.src, &self.alt, class);
    }
}

/// Link given either as a bare href string or `{href, text}`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct LinkRef {
    pub href: String,
    pub text: String,
}

impl LinkRef {
    /// Returns `None` without an href.
    pub(crate) fn from_value(value: &Value, default_text: &str) -> Option<Self> {
        let (href, text) = match value {
            Value::String(href) => (href.clone(), String::new()),
            Value::Object(_) => (
                as_string(field(value, "href"), ""),
                as_string(field(value, "text"), ""),
            ),
            _ => return None,
        };
        if href.trim().is_empty() {
            return None;
        }
        let text = if text.trim().is_empty() {
            default_text.to_owned()
        } else {
            text
        };
        Some(Self { href, text })
    }

    pub(crate) fn write(&self, out: &mut String, class: &str) {
        html::link(out, &self.href, class, &self.text);
    }
}

/// Column count within `2..=4`, falling back to `default`.
pub(crate) fn columns(props: &Value, default: u64, lint: &mut Lint) -> u64 {
    let value = field(props, "columns");
    if value.is_null() {
        return default;
    }
    match as_u64(value) {
        Some(columns) if (2..=4).contains(&columns) => columns,
        Some(columns) => {
            let clamped = columns.clamp(2, 4);
            lint.warn(format!("columns {columns} out of range, using {clamped}"));
            clamped
        }
        None => {
            lint.warn(format!("columns is not a number, using {default}"));
            default
        }
    }
}

/// Objects from the list at `key` that have content in every `required`
/// field. Dropped entries are recorded in `lint`.
pub(crate) fn keep_items<'a>(
    props: &'a Value,
    key: &str,
    required: &[&str],
    lint: &mut Lint,
) -> Vec<&'a Value> {
    as_array(field(props, key))
        .iter()
        .enumerate()
        .filter(|(index, item)| {
            if !item.is_object() {
                lint.warn(format!("{key}[{index}] dropped: not an object"));
                return false;
            }
            match required.iter().find(|name| !has_content(field(item, name))) {
                Some(missing) => {
                    lint.dropped(key, *index, missing);
                    false
                }
                None => true,
            }
        })
        .map(|(_, item)| item)
        .collect()
}

/// Text of an enumerated option at `key`, or `default` when absent or not
/// one of `known`.
pub(crate) fn choice(props: &Value, key: &str, default: &str, known: &[&str]) -> String {
    let value = as_string(field(props, key), default);
    if known.iter().any(|candidate| *candidate == value) {
        value
    } else {
        default.to_owned()
    }
}

/// Layout variant, see [`choice`].
pub(crate) fn layout(props: &Value, default: &str, known: &[&str]) -> String {
    choice(props, "layout", default, known)
}
