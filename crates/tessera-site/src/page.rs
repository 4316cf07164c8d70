//! Full HTML documents: configured pages, the not-found page and the
//! fallback shown while no configuration exists.

use std::fmt::Write as _;

use tessera_sections::html::{self, escape_html};
use tessera_sections::{Diagnostic, Dispatcher};

use crate::chrome::{render_footer, render_navigation};
use crate::document::{PageConfig, SiteConfig};
use crate::theme::Theme;

/// A rendered page document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    /// Number of sections that produced markup.
    pub section_count: usize,
    /// Development-mode dispatch diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

/// Browser title for a page: `{page} | {site}`, or whichever part is set.
#[must_use]
pub fn document_title(page_title: Option<&str>, site_name: &str) -> String {
    let page_title = page_title.map(str::trim).unwrap_or_default();
    let site_name = site_name.trim();
    match (page_title.is_empty(), site_name.is_empty()) {
        (false, false) => format!("{page_title} | {site_name}"),
        (false, true) => page_title.to_owned(),
        (true, false) => site_name.to_owned(),
        (true, true) => "Tessera".to_owned(),
    }
}

fn write_head(out: &mut String, title: &str, description: &str, extra: &str) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    if !description.trim().is_empty() {
        let _ = writeln!(
            out,
            r#"<meta name="description" content="{}">"#,
            escape_html(description)
        );
    }
    out.push_str(extra);
    out.push_str("</head>\n");
}

/// Render a configured page with the site chrome around its sections.
#[must_use]
pub fn render_page(site: &SiteConfig, page: &PageConfig, dispatcher: &Dispatcher<'_>) -> RenderedPage {
    let site_name = site.name.as_deref().unwrap_or_default();
    let description = page
        .description
        .as_deref()
        .or(site.description.as_deref())
        .unwrap_or_default();
    let theme = Theme::from_config(site.theme.as_ref());
    let dispatched = dispatcher.render(&page.sections);

    let mut out = String::new();
    write_head(
        &mut out,
        &document_title(page.title.as_deref(), site_name),
        description,
        "",
    );
    let _ = writeln!(out, r#"<body style="{}">"#, escape_html(&theme.css_vars()));
    out.push_str(&render_navigation(site.navigation.as_ref()));
    out.push_str("<main class=\"page\">");
    if dispatched.sections.is_empty() {
        write_empty_page(&mut out, site);
    } else {
        out.push_str(&dispatched.html());
    }
    out.push_str("</main>");
    out.push_str(&render_footer(site.footer.as_ref(), site_name));
    out.push_str("\n</body>\n</html>\n");

    RenderedPage {
        html: out,
        section_count: dispatched.sections.len(),
        diagnostics: dispatched.diagnostics,
    }
}

fn write_empty_page(out: &mut String, site: &SiteConfig) {
    html::open(out, "div", "page__empty", &[]);
    html::element(out, "h1", "", site.name.as_deref().unwrap_or_default());
    html::element(
        out,
        "p",
        "page__description",
        site.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
            .unwrap_or("Welcome to our website"),
    );
    html::element(out, "p", "page__notice", "No sections configured for this page.");
    html::close(out, "div");
}

/// Page shown for a slug with no configured page.
#[must_use]
pub fn not_found_page(site: &SiteConfig, slug: &str) -> String {
    let site_name = site.name.as_deref().unwrap_or_default();
    let theme = Theme::from_config(site.theme.as_ref());

    let mut out = String::new();
    write_head(&mut out, &document_title(Some("Page not found"), site_name), "", "");
    let _ = writeln!(out, r#"<body style="{}">"#, escape_html(&theme.css_vars()));
    out.push_str(&render_navigation(site.navigation.as_ref()));
    out.push_str("<main class=\"page\">");
    html::open(&mut out, "div", "page__not-found", &[]);
    html::element(&mut out, "h1", "", "Page not found");
    html::element(
        &mut out,
        "p",
        "",
        &format!("There is no page at {slug}."),
    );
    html::link(&mut out, "/", "button button--primary", "Back to home");
    html::close(&mut out, "div");
    out.push_str("</main>");
    out.push_str(&render_footer(site.footer.as_ref(), site_name));
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Skeleton page shown while no configuration exists. It reloads itself so
/// the site appears once a configuration file is written.
#[must_use]
pub fn fallback_page() -> String {
    let mut out = String::new();
    write_head(
        &mut out,
        "Tessera",
        "",
        "<meta http-equiv=\"refresh\" content=\"2\">\n",
    );
    out.push_str("<body>\n<div class=\"skeleton\" aria-busy=\"true\">");
    out.push_str(
        "<div class=\"skeleton__nav\"><div class=\"skeleton__block skeleton__logo\"></div>\
         <div class=\"skeleton__block skeleton__link\"></div>\
         <div class=\"skeleton__block skeleton__link\"></div>\
         <div class=\"skeleton__block skeleton__link\"></div></div>",
    );
    out.push_str(
        "<div class=\"skeleton__hero\"><div class=\"skeleton__block skeleton__title\"></div>\
         <div class=\"skeleton__block skeleton__text\"></div>\
         <div class=\"skeleton__block skeleton__button\"></div></div>",
    );
    out.push_str("<div class=\"skeleton__grid\">");
    for _ in 0..3 {
        out.push_str("<div class=\"skeleton__block skeleton__card\"></div>");
    }
    out.push_str("</div>");
    out.push_str(
        "<p class=\"skeleton__hint\">Waiting for config/config.yaml or config/config.json. \
         This page refreshes automatically.</p>",
    );
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
