//! Small HTML writing helpers shared by the section renderers and site chrome.
//!
//! Every helper escapes the text and attribute values it is given and writes
//! nothing for blank text.

use std::fmt::Write;

/// Escape HTML special characters.
///
/// # Example
///
/// ```
/// use tessera_sections::html::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Write `<tag class="class">text</tag>` unless `text` is blank.
pub fn element(out: &mut String, tag: &str, class: &str, text: &str) {
    if is_blank(text) {
        return;
    }
    open(out, tag, class, &[]);
    out.push_str(&escape_html(text));
    close(out, tag);
}

/// Write an anchor unless `text` is blank.
pub fn link(out: &mut String, href: &str, class: &str, text: &str) {
    if is_blank(text) {
        return;
    }
    open(out, "a", class, &[("href", href)]);
    out.push_str(&escape_html(text));
    close(out, "a");
}

/// Write an `<img>` unless `src` is blank.
pub fn image(out: &mut String, src: &str, alt: &str, class: &str) {
    if is_blank(src) {
        return;
    }
    let _ = write!(
        out,
        r#"<img class="{}" src="{}" alt="{}" loading="lazy">"#,
        escape_html(class),
        escape_html(src),
        escape_html(alt)
    );
}

/// Write an opening tag with a class and optional extra attributes.
///
/// A blank class and attributes with blank values are skipped.
pub fn open(out: &mut String, tag: &str, class: &str, attrs: &[(&str, &str)]) {
    open_with_flags(out, tag, class, attrs, &[]);
}

/// Like [`open`], followed by boolean attributes such as `required`.
pub fn open_with_flags(
    out: &mut String,
    tag: &str,
    class: &str,
    attrs: &[(&str, &str)],
    flags: &[&str],
) {
    let _ = write!(out, "<{tag}");
    if !is_blank(class) {
        let _ = write!(out, r#" class="{}""#, escape_html(class));
    }
    for (name, value) in attrs {
        if !is_blank(value) {
            let _ = write!(out, r#" {name}="{}""#, escape_html(value));
        }
    }
    for flag in flags {
        let _ = write!(out, " {flag}");
    }
    out.push('>');
}

/// Write a closing tag.
pub fn close(out: &mut String, tag: &str) {
    let _ = write!(out, "</{tag}>");
}
