//! Request-time site rendering.
//!
//! [`Site`] reads the configuration document fresh for every call, so edits
//! to the file show up on the next request without a restart.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tessera_sections::{Dispatcher, RenderMode, SectionRegistry};

use crate::document::{ConfigDocument, PageSummary};
use crate::loader::{self, ConfigStatus, LoadError};
use crate::page::{RenderedPage, fallback_page, not_found_page, render_page};

/// Outcome of rendering a slug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// A configured page.
    Page(RenderedPage),
    /// No page has this slug.
    NotFound(String),
    /// No usable configuration exists yet.
    Fallback(String),
}

impl PageOutcome {
    /// The document markup.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Page(page) => &page.html,
            Self::NotFound(html) | Self::Fallback(html) => html,
        }
    }
}

/// A site backed by a configuration directory.
#[derive(Clone, Debug)]
pub struct Site {
    config_dir: PathBuf,
    registry: Arc<SectionRegistry>,
    mode: RenderMode,
}

impl Site {
    /// Create a site with the built-in section registry.
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>, mode: RenderMode) -> Self {
        Self::with_registry(config_dir, SectionRegistry::builtin().into_shared(), mode)
    }

    /// Create a site with a custom section registry.
    #[must_use]
    pub fn with_registry(
        config_dir: impl Into<PathBuf>,
        registry: Arc<SectionRegistry>,
        mode: RenderMode,
    ) -> Self {
        Self {
            config_dir: config_dir.into(),
            registry,
            mode,
        }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Existence and modification time of the configuration document.
    #[must_use]
    pub fn status(&self) -> ConfigStatus {
        loader::check_config(&self.config_dir)
    }

    /// Load the configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the document exists but cannot be read or
    /// parsed.
    pub fn try_load(&self) -> Result<Option<ConfigDocument>, LoadError> {
        loader::load_document(&self.config_dir)
    }

    /// Load the configuration document, treating load errors as absence.
    #[must_use]
    pub fn load(&self) -> Option<ConfigDocument> {
        match self.try_load() {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load site configuration");
                None
            }
        }
    }

    /// Render the page at `slug`.
    #[must_use]
    pub fn render(&self, slug: &str) -> PageOutcome {
        let Some(document) = self.load() else {
            return PageOutcome::Fallback(fallback_page());
        };
        let Some(site) = &document.site else {
            tracing::warn!("Configuration has no `site` block");
            return PageOutcome::Fallback(fallback_page());
        };
        let Some(page) = document.page(slug) else {
            tracing::debug!(slug, "No page configured");
            return PageOutcome::NotFound(not_found_page(site, slug));
        };

        let dispatcher = Dispatcher::new(&self.registry, self.mode);
        let rendered = render_page(site, &page, &dispatcher);
        tracing::debug!(
            slug,
            sections = rendered.section_count,
            skipped = page.sections.len() - rendered.section_count,
            "Rendered page"
        );
        PageOutcome::Page(rendered)
    }

    /// Page data without sections, or `None` when no page has this slug.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the document exists but cannot be loaded.
    pub fn page_summary(&self, slug: &str) -> Result<Option<PageSummary>, LoadError> {
        let Some(document) = self.try_load()? else {
            return Ok(None);
        };
        Ok(document.page(slug).as_ref().map(PageSummary::from))
    }
}
