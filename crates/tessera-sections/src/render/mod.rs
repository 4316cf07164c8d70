//! Built-in section renderers.
//!
//! Each kind lives in its own module and follows the same shape: a typed
//! props struct extracted once from the untyped section props, a minimum
//! content predicate, and a body writer. [`BuiltinRenderer`] wires a
//! [`SectionKind`] to the matching module.

mod common;
mod contact;
mod content;
mod cta;
mod faq;
mod features;
mod gallery;
mod grid;
mod hero;
mod logo_cloud;
mod pricing;
mod stats;
mod team;
mod testimonials;

use serde_json::Value;

use crate::access::class_names;
use crate::html;
use crate::output::{RenderError, SectionOutput};
use crate::renderer::SectionRenderer;
use crate::section::{Section, SectionKind};

/// Warnings collected while extracting typed props.
#[derive(Debug, Default)]
pub(crate) struct Lint {
    warnings: Vec<String>,
}

impl Lint {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record a list entry removed for lacking a required field.
    pub(crate) fn dropped(&mut self, list: &str, index: usize, missing: &str) {
        self.warnings
            .push(format!("{list}[{index}] dropped: missing {missing}"));
    }

    pub(crate) fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

/// Typed view of one section kind's props.
pub(crate) trait SectionProps: Sized {
    const KIND: SectionKind;

    /// What the section needs before it renders, phrased for lint output.
    const MINIMUM: &'static str;

    /// Build the typed props, recording dropped entries in `lint`.
    fn extract(props: &Value, lint: &mut Lint) -> Self;

    fn has_minimum_content(&self) -> bool;

    /// Layout variant added to the section's class list.
    fn layout(&self) -> &str {
        ""
    }

    /// Write everything inside the `<section>` element.
    fn write_body(&self, out: &mut String);
}

fn render_props<P: SectionProps>(section: &Section) -> SectionOutput {
    let props = P::extract(&section.props, &mut Lint::new());
    if !props.has_minimum_content() {
        return SectionOutput::Empty;
    }

    let kind_class = format!("section--{}", P::KIND);
    let layout_class = if props.layout().is_empty() {
        String::new()
    } else {
        format!("layout--{}", props.layout())
    };
    let class = class_names(["section", &kind_class, &layout_class]);

    let mut out = String::new();
    html::open(
        &mut out,
        "section",
        &class,
        &[
            ("id", section.anchor().unwrap_or_default()),
            ("data-section", P::KIND.as_str()),
        ],
    );
    props.write_body(&mut out);
    html::close(&mut out, "section");
    SectionOutput::Html(out)
}

fn lint_props<P: SectionProps>(section: &Section) -> Vec<String> {
    let mut lint = Lint::new();
    let props = P::extract(&section.props, &mut lint);
    if !props.has_minimum_content() {
        lint.warn(format!(
            "insufficient content, section will not render: {}",
            P::MINIMUM
        ));
    }
    lint.into_warnings()
}

/// Renderer for a built-in section kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinRenderer {
    kind: SectionKind,
}

impl BuiltinRenderer {
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }
}

macro_rules! dispatch_kind {
    ($kind:expr, $func:ident, $section:expr) => {
        match $kind {
            SectionKind::Hero => $func::<hero::HeroProps>($section),
            SectionKind::Features => $func::<features::FeaturesProps>($section),
            SectionKind::Stats => $func::<stats::StatsProps>($section),
            SectionKind::Team => $func::<team::TeamProps>($section),
            SectionKind::Testimonials => $func::<testimonials::TestimonialsProps>($section),
            SectionKind::Grid => $func::<grid::GridProps>($section),
            SectionKind::Cta => $func::<cta::CtaProps>($section),
            SectionKind::Pricing => $func::<pricing::PricingProps>($section),
            SectionKind::Faq => $func::<faq::FaqProps>($section),
            SectionKind::Contact => $func::<contact::ContactProps>($section),
            SectionKind::Gallery => $func::<gallery::GalleryProps>($section),
            SectionKind::LogoCloud => $func::<logo_cloud::LogoCloudProps>($section),
            SectionKind::Content => $func::<content::ContentProps>($section),
        }
    };
}

impl SectionRenderer for BuiltinRenderer {
    fn render(&self, section: &Section) -> Result<SectionOutput, RenderError> {
        Ok(dispatch_kind!(self.kind, render_props, section))
    }

    fn lint(&self, section: &Section) -> Vec<String> {
        dispatch_kind!(self.kind, lint_props, section)
    }
}
