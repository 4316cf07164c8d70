//! Configuration document loading and page composition for Tessera.
//!
//! This crate provides:
//! - [`ConfigDocument`]: the site and page model read from `config.yaml`
//!   (or `config.json`)
//! - [`loader`] functions for discovery, status and parsing
//! - [`Site`]: per-request rendering of a slug into a full HTML document
//!
//! # Quick Start
//!
//! ```no_run
//! use tessera_sections::RenderMode;
//! use tessera_site::{PageOutcome, Site};
//!
//! let site = Site::new("config", RenderMode::Production);
//! match site.render("/") {
//!     PageOutcome::Page(page) => println!("{}", page.html),
//!     PageOutcome::NotFound(_) => eprintln!("no page at /"),
//!     PageOutcome::Fallback(_) => eprintln!("no configuration yet"),
//! }
//! ```

mod chrome;
mod document;
mod lenient;
pub mod loader;
mod page;
mod site;
mod theme;

pub use chrome::{render_footer, render_navigation};
pub use document::{
    ConfigDocument, ContactConfig, CtaConfig, FooterColumn, FooterConfig, HOME_SLUG, LinkConfig,
    LogoConfig, NavigationConfig, NewsletterConfig, PageConfig, PageSummary, SiteConfig,
    SocialLink, ThemeConfig, normalize_slug,
};
pub use loader::{ConfigFile, ConfigFormat, ConfigStatus, LoadError};
pub use page::{RenderedPage, document_title, fallback_page, not_found_page, render_page};
pub use site::{PageOutcome, Site};
pub use theme::Theme;
