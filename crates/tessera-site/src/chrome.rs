//! Navigation bar and footer markup.

use tessera_sections::access::class_names;
use tessera_sections::html;

use crate::document::{FooterConfig, LinkConfig, LogoConfig, NavigationConfig, SocialLink};

/// Route hash links to the home page so they work from every page.
fn normalize_href(href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        "/".to_owned()
    } else if href.starts_with('#') {
        format!("/{href}")
    } else {
        href.to_owned()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.trim().is_empty())
}

fn write_logo(out: &mut String, logo: Option<&LogoConfig>, class: &str, default_text: &str) {
    let logo = logo.cloned().unwrap_or_default();
    html::open(out, "a", class, &[("href", "/")]);
    if let Some(image) = non_blank(logo.image.as_ref()) {
        let alt = non_blank(logo.alt.as_ref()).unwrap_or("Logo");
        html::image(out, image, alt, "logo__image");
    } else {
        let text = non_blank(logo.text.as_ref()).unwrap_or(default_text);
        html::element(out, "span", "logo__text", text);
    }
    html::close(out, "a");
}

fn write_social(out: &mut String, social: &[SocialLink], class: &str) {
    let links: Vec<_> = social
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .collect();
    if links.is_empty() {
        return;
    }
    html::open(out, "ul", class, &[]);
    for link in links {
        let label = if link.platform.trim().is_empty() {
            link.url.as_str()
        } else {
            link.platform.as_str()
        };
        let platform_class = format!("social--{}", link.platform.trim());
        html::open(out, "li", "", &[]);
        html::open(
            out,
            "a",
            &class_names(["social__link", &platform_class]),
            &[
                ("href", link.url.as_str()),
                ("aria-label", label),
                ("rel", "noopener"),
            ],
        );
        out.push_str(&html::escape_html(label));
        html::close(out, "a");
        html::close(out, "li");
    }
    html::close(out, "ul");
}

fn write_nav_link(out: &mut String, link: &LinkConfig) {
    if link.text.trim().is_empty() {
        return;
    }
    let children: Vec<_> = link
        .children
        .iter()
        .filter(|child| !child.text.trim().is_empty())
        .collect();

    if children.is_empty() {
        html::open(out, "li", "navbar__item", &[]);
        html::link(out, &normalize_href(&link.href), "navbar__link", &link.text);
        html::close(out, "li");
        return;
    }

    html::open(out, "li", "navbar__item navbar__item--dropdown", &[]);
    html::open(
        out,
        "button",
        "navbar__link",
        &[("type", "button"), ("aria-haspopup", "true")],
    );
    out.push_str(&html::escape_html(&link.text));
    html::close(out, "button");
    html::open(out, "ul", "navbar__dropdown", &[]);
    for child in children {
        html::open(out, "li", "", &[]);
        html::link(out, &normalize_href(&child.href), "navbar__dropdown-link", &child.text);
        html::close(out, "li");
    }
    html::close(out, "ul");
    html::close(out, "li");
}

/// Navigation bar markup. Absent configuration renders nothing.
#[must_use]
pub fn render_navigation(config: Option<&NavigationConfig>) -> String {
    let Some(config) = config else {
        return String::new();
    };

    let mut out = String::new();
    let sticky = config.sticky.unwrap_or(true);
    let class = class_names([
        "navbar",
        if sticky { "navbar--sticky" } else { "" },
        if config.transparent { "navbar--transparent" } else { "" },
    ]);
    html::open(&mut out, "nav", &class, &[]);
    write_logo(&mut out, config.logo.as_ref(), "navbar__logo", "Brand");

    if config.links.iter().any(|link| !link.text.trim().is_empty()) {
        html::open(&mut out, "ul", "navbar__links", &[]);
        for link in &config.links {
            write_nav_link(&mut out, link);
        }
        html::close(&mut out, "ul");
    }

    write_social(&mut out, &config.social, "navbar__social");

    if let Some(cta) = &config.cta
        && let (Some(text), Some(href)) = (non_blank(cta.text.as_ref()), non_blank(cta.href.as_ref()))
    {
        html::link(&mut out, href, "navbar__cta button button--primary", text);
    }

    html::close(&mut out, "nav");
    out
}

/// Footer markup. Absent configuration renders nothing.
///
/// The copyright line defaults to `© {site_name}`.
#[must_use]
pub fn render_footer(config: Option<&FooterConfig>, site_name: &str) -> String {
    let Some(config) = config else {
        return String::new();
    };

    let layout = match config.layout.as_deref().map(str::trim) {
        Some(layout @ ("columns" | "centered" | "minimal")) => layout,
        _ => "columns",
    };

    let mut out = String::new();
    html::open(
        &mut out,
        "footer",
        &format!("footer layout--{layout}"),
        &[],
    );

    html::open(&mut out, "div", "footer__brand", &[]);
    let brand = if site_name.trim().is_empty() { "Brand" } else { site_name };
    write_logo(&mut out, config.logo.as_ref(), "footer__logo", brand);
    html::element(&mut out, "p", "footer__tagline", config.tagline.as_deref().unwrap_or_default());
    write_social(&mut out, &config.social, "footer__social");
    html::close(&mut out, "div");

    if layout != "minimal" {
        for column in &config.sections {
            let links: Vec<_> = column
                .links
                .iter()
                .filter(|link| !link.text.trim().is_empty())
                .collect();
            if links.is_empty() {
                continue;
            }
            html::open(&mut out, "div", "footer__column", &[]);
            html::element(
                &mut out,
                "h3",
                "footer__column-title",
                column.title.as_deref().unwrap_or_default(),
            );
            html::open(&mut out, "ul", "footer__links", &[]);
            for link in links {
                html::open(&mut out, "li", "", &[]);
                html::link(&mut out, &normalize_href(&link.href), "footer__link", &link.text);
                html::close(&mut out, "li");
            }
            html::close(&mut out, "ul");
            html::close(&mut out, "div");
        }

        if let Some(newsletter) = &config.newsletter {
            html::open(&mut out, "div", "footer__newsletter", &[]);
            html::element(
                &mut out,
                "h3",
                "footer__newsletter-title",
                non_blank(newsletter.title.as_ref()).unwrap_or("Subscribe to our newsletter"),
            );
            html::element(
                &mut out,
                "p",
                "footer__newsletter-description",
                newsletter.description.as_deref().unwrap_or_default(),
            );
            html::open(&mut out, "form", "footer__newsletter-form", &[("method", "post")]);
            html::open(
                &mut out,
                "input",
                "form__input",
                &[
                    ("type", "email"),
                    ("name", "email"),
                    (
                        "placeholder",
                        non_blank(newsletter.placeholder.as_ref()).unwrap_or("Enter your email"),
                    ),
                ],
            );
            html::open(&mut out, "button", "button button--primary", &[("type", "submit")]);
            out.push_str(&html::escape_html(
                non_blank(newsletter.button_text.as_ref()).unwrap_or("Subscribe"),
            ));
            html::close(&mut out, "button");
            html::close(&mut out, "form");
            html::close(&mut out, "div");
        }

        if let Some(contact) = &config.contact {
            let email = non_blank(contact.email.as_ref());
            let phone = non_blank(contact.phone.as_ref());
            let address = non_blank(contact.address.as_ref());
            if email.is_some() || phone.is_some() || address.is_some() {
                html::open(&mut out, "address", "footer__contact", &[]);
                if let Some(email) = email {
                    html::link(&mut out, &format!("mailto:{email}"), "footer__email", email);
                }
                if let Some(phone) = phone {
                    html::link(&mut out, &format!("tel:{phone}"), "footer__phone", phone);
                }
                html::element(&mut out, "p", "footer__address", address.unwrap_or_default());
                html::close(&mut out, "address");
            }
        }
    }

    let copyright = match non_blank(config.copyright.as_ref()) {
        Some(copyright) => copyright.to_owned(),
        None => format!("© {}", site_name.trim()).trim_end().to_owned(),
    };
    html::element(&mut out, "p", "footer__copyright", &copyright);

    html::close(&mut out, "footer");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CtaConfig, FooterColumn, NewsletterConfig};

    fn link(text: &str, href: &str) -> LinkConfig {
        LinkConfig {
            text: text.to_owned(),
            href: href.to_owned(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_absent_chrome_renders_nothing() {
        assert_eq!(render_navigation(None), "");
        assert_eq!(render_footer(None, "Acme"), "");
    }

    #[test]
    fn test_navigation_defaults() {
        let html = render_navigation(Some(&NavigationConfig::default()));
        assert!(html.starts_with(r#"<nav class="navbar navbar--sticky">"#));
        assert!(html.contains(r#"<span class="logo__text">Brand</span>"#));
        assert!(!html.contains("navbar__links"));
        assert!(!html.contains("navbar__cta"));
    }

    #[test]
    fn test_hash_links_point_home() {
        let config = NavigationConfig {
            links: vec![link("Features", "#features"), link("Blog", "/blog"), link("", "/x")],
            ..Default::default()
        };
        let html = render_navigation(Some(&config));
        assert!(html.contains(r#"href="/#features""#));
        assert!(html.contains(r#"href="/blog""#));
        assert_eq!(html.matches("navbar__item").count(), 2);
    }

    #[test]
    fn test_dropdown_children() {
        let mut company = link("Company", "/company");
        company.children = vec![link("About", "/about"), link("Team", "#team")];
        let config = NavigationConfig {
            links: vec![company],
            ..Default::default()
        };
        let html = render_navigation(Some(&config));
        assert!(html.contains("navbar__item--dropdown"));
        assert!(html.contains(r#"href="/about""#));
        assert!(html.contains(r#"href="/#team""#));
    }

    #[test]
    fn test_cta_needs_text_and_href() {
        let mut config = NavigationConfig {
            cta: Some(CtaConfig {
                text: Some("Sign up".to_owned()),
                href: None,
            }),
            sticky: Some(false),
            transparent: true,
            ..Default::default()
        };
        let html = render_navigation(Some(&config));
        assert!(!html.contains("navbar__cta"));
        assert!(html.starts_with(r#"<nav class="navbar navbar--transparent">"#));

        config.cta = Some(CtaConfig {
            text: Some("Sign up".to_owned()),
            href: Some("/signup".to_owned()),
        });
        assert!(render_navigation(Some(&config)).contains(r#"href="/signup">Sign up</a>"#));
    }

    #[test]
    fn test_footer_default_copyright() {
        let html = render_footer(Some(&FooterConfig::default()), "Acme");
        assert!(html.contains(r#"<p class="footer__copyright">© Acme</p>"#));
        assert!(html.contains(r#"<span class="logo__text">Acme</span>"#));
    }

    #[test]
    fn test_footer_columns_and_newsletter() {
        let config = FooterConfig {
            sections: vec![FooterColumn {
                title: Some("Product".to_owned()),
                links: vec![link("Pricing", "#pricing")],
            }],
            newsletter: Some(NewsletterConfig::default()),
            copyright: Some("2026 Acme Inc.".to_owned()),
            ..Default::default()
        };
        let html = render_footer(Some(&config), "Acme");
        assert!(html.contains("<h3 class=\"footer__column-title\">Product</h3>"));
        assert!(html.contains(r#"href="/#pricing""#));
        assert!(html.contains("Subscribe to our newsletter"));
        assert!(html.contains("2026 Acme Inc."));
        assert!(!html.contains("©"));
    }

    #[test]
    fn test_minimal_footer_skips_columns() {
        let config = FooterConfig {
            layout: Some("minimal".to_owned()),
            sections: vec![FooterColumn {
                title: Some("Product".to_owned()),
                links: vec![link("Pricing", "/pricing")],
            }],
            ..Default::default()
        };
        let html = render_footer(Some(&config), "Acme");
        assert!(html.contains("layout--minimal"));
        assert!(!html.contains("footer__column"));
    }
}
