//! Configuration document model.
//!
//! The document has a `site` block and an ordered `pages` list. A top-level
//! `sections` list is still read as the home page when `pages` is absent,
//! but it is deprecated.
//!
//! Site chrome fields are optional everywhere. A field of the wrong shape
//! reads as unset rather than rejecting the document. Section props stay
//! untyped and are handled by the renderers.

use serde::{Deserialize, Serialize};
use tessera_sections::Section;

use crate::lenient;

/// Slug of the page synthesized from the top-level `sections` shorthand.
pub const HOME_SLUG: &str = "/";

/// Parsed configuration document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub site: Option<SiteConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub pages: Option<Vec<PageConfig>>,
    /// Deprecated home page shorthand.
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub sections: Option<Vec<Section>>,
}

impl ConfigDocument {
    /// Whether the deprecated top-level `sections` list is in use.
    #[must_use]
    pub fn uses_sections_shorthand(&self) -> bool {
        self.pages.is_none() && self.sections.is_some()
    }

    /// The document's pages.
    ///
    /// `pages` wins whenever present. Otherwise the `sections` shorthand
    /// becomes a single home page titled "Home".
    #[must_use]
    pub fn pages(&self) -> Vec<PageConfig> {
        if let Some(pages) = &self.pages {
            return pages.clone();
        }
        match &self.sections {
            Some(sections) => vec![PageConfig {
                slug: HOME_SLUG.to_owned(),
                title: Some("Home".to_owned()),
                description: self
                    .site
                    .as_ref()
                    .and_then(|site| site.description.clone()),
                sections: sections.clone(),
            }],
            None => Vec::new(),
        }
    }

    /// Page whose slug matches `slug` after normalization.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<PageConfig> {
        let slug = normalize_slug(slug);
        self.pages()
            .into_iter()
            .find(|page| normalize_slug(&page.slug) == slug)
    }

    /// Site name, or an empty string when unset.
    #[must_use]
    pub fn site_name(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|site| site.name.as_deref())
            .unwrap_or_default()
    }
}

/// Normalize a page slug: leading slash, no trailing slash except for the
/// root, surrounding whitespace removed.
///
/// ```
/// use tessera_site::normalize_slug;
///
/// assert_eq!(normalize_slug("blog/"), "/blog");
/// assert_eq!(normalize_slug(""), "/");
/// ```
#[must_use]
pub fn normalize_slug(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    format!("/{trimmed}")
}

/// Site-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemeConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigation: Option<NavigationConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub footer: Option<FooterConfig>,
}

/// Theme color tokens as written in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent: Option<String>,
}

/// One page of the site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Ordered section list.
    #[serde(default, deserialize_with = "lenient::list")]
    pub sections: Vec<Section>,
}

/// Page data without its sections, as served by the page data API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&PageConfig> for PageSummary {
    fn from(page: &PageConfig) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            description: page.description.clone(),
        }
    }
}

/// Logo shown in the navigation bar and footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
}

/// A navigation or footer link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub href: String,
    /// Dropdown entries. Only one level is rendered.
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<LinkConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub href: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
}

/// Navigation bar configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<LogoConfig>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub links: Vec<LinkConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub cta: Option<CtaConfig>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub social: Vec<SocialLink>,
    /// Defaults to sticky when unset.
    #[serde(
        default,
        deserialize_with = "lenient::opt_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub sticky: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub transparent: bool,
}

/// A titled column of footer links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub links: Vec<LinkConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub button_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
}

/// Footer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// `columns`, `centered` or `minimal`.
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<LogoConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sections: Vec<FooterColumn>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub social: Vec<SocialLink>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub newsletter: Option<NewsletterConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<ContactConfig>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(yaml: &str) -> ConfigDocument {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("/"), "/");
        assert_eq!(normalize_slug(""), "/");
        assert_eq!(normalize_slug("about"), "/about");
        assert_eq!(normalize_slug(" /docs/guide/ "), "/docs/guide");
    }

    #[test]
    fn test_pages_win_over_shorthand() {
        let doc = document(
            r"
pages:
  - slug: /about
    sections:
      - type: hero
        props: {title: About}
sections:
  - type: hero
    props: {title: Ignored}
",
        );
        assert!(!doc.uses_sections_shorthand());
        let pages = doc.pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "/about");
        assert!(doc.page("/").is_none());
    }

    #[test]
    fn test_sections_shorthand_becomes_home_page() {
        let doc = document(
            r"
site:
  name: Acme
  description: Widgets for everyone
sections:
  - type: hero
    props: {title: Hello}
",
        );
        assert!(doc.uses_sections_shorthand());
        let home = doc.page("/").unwrap();
        assert_eq!(home.title.as_deref(), Some("Home"));
        assert_eq!(home.description.as_deref(), Some("Widgets for everyone"));
        assert_eq!(home.sections.len(), 1);
        assert!(doc.page("/about").is_none());
    }

    #[test]
    fn test_page_lookup_normalizes() {
        let doc = document(
            r"
pages:
  - slug: blog/
    title: Blog
",
        );
        assert_eq!(doc.page("/blog").unwrap().title.as_deref(), Some("Blog"));
        assert_eq!(doc.page("blog").unwrap().title.as_deref(), Some("Blog"));
    }

    #[test]
    fn test_malformed_sections_still_parse() {
        let doc = document(
            r"
pages:
  - slug: /
    sections:
      - type: hero
      - just a string
      - props: {title: no type}
",
        );
        let page = doc.page("/").unwrap();
        assert_eq!(page.sections.len(), 3);
        assert_eq!(page.sections[1].section_type, "");
    }

    #[test]
    fn test_chrome_fields() {
        let doc = document(
            r##"
site:
  name: Acme
  theme: {primary: "#112233"}
  navigation:
    logo: {text: Acme}
    links:
      - text: Features
        href: "#features"
      - text: Company
        href: /company
        children:
          - {text: About, href: /about}
    cta: {text: Sign up, href: /signup}
    sticky: false
  footer:
    copyright: "2026 Acme"
    newsletter: {buttonText: Join}
"##,
        );
        let site = doc.site.unwrap();
        let nav = site.navigation.unwrap();
        assert_eq!(nav.links.len(), 2);
        assert_eq!(nav.links[1].children[0].href, "/about");
        assert_eq!(nav.sticky, Some(false));
        assert_eq!(
            site.footer.unwrap().newsletter.unwrap().button_text.as_deref(),
            Some("Join")
        );
        assert_eq!(site.theme.unwrap().primary.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_mistyped_chrome_keeps_the_rest() {
        let doc = document(
            r"
site:
  name: Acme
  theme: dark
  navigation:
    logo: {text: Acme}
    links: oops
    sticky: 42
  footer:
    copyright: 2026
    sections:
      - {title: Product, links: [{text: Docs, href: /docs}]}
      - just text
pages:
  - slug: /
    sections: [{type: hero, props: {title: Hi}}]
",
        );
        let site = doc.site.as_ref().unwrap();
        assert_eq!(doc.site_name(), "Acme");
        assert_eq!(site.theme, None);
        let nav = site.navigation.as_ref().unwrap();
        assert!(nav.links.is_empty());
        assert_eq!(nav.sticky, None);
        assert_eq!(nav.logo.as_ref().unwrap().text.as_deref(), Some("Acme"));
        let footer = site.footer.as_ref().unwrap();
        assert_eq!(footer.copyright.as_deref(), Some("2026"));
        assert_eq!(footer.sections.len(), 1);
        assert_eq!(doc.pages().len(), 1);
    }

    #[test]
    fn test_page_summary_drops_sections() {
        let page = PageConfig {
            slug: "/blog".to_owned(),
            title: Some("Blog".to_owned()),
            description: None,
            sections: vec![Section::new("hero", serde_json::json!({"title": "x"}))],
        };
        let json = serde_json::to_value(PageSummary::from(&page)).unwrap();
        assert_eq!(json, serde_json::json!({"slug": "/blog", "title": "Blog"}));
    }
}
