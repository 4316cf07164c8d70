//! Hero section: headline, supporting copy, buttons, trust indicators and an
//! optional image.

use serde_json::Value;

use super::common::{self, Button, ImageRef};
use super::{Lint, SectionProps};
use crate::access::{as_array, as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["centered", "split", "minimal", "full-height"];

#[derive(Debug)]
pub(crate) struct HeroProps {
    layout: String,
    title: String,
    subtitle: String,
    description: String,
    buttons: Vec<Button>,
    trust_indicators: Vec<String>,
    image: Option<ImageRef>,
}

impl SectionProps for HeroProps {
    const KIND: SectionKind = SectionKind::Hero;
    const MINIMUM: &'static str =
        "needs a title, subtitle, description, button, trust indicator or image";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let title = as_string(field(props, "title"), "");
        let trust_indicators = as_array(field(props, "trustIndicators"))
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let text = as_string(value, "");
                if text.trim().is_empty() {
                    lint.dropped("trustIndicators", index, "text");
                    None
                } else {
                    Some(text)
                }
            })
            .collect();
        let default_alt = if title.trim().is_empty() {
            "Hero illustration"
        } else {
            title.as_str()
        };
        let image = ImageRef::from_value(field(props, "image"), default_alt);

        Self {
            layout: common::layout(props, "centered", LAYOUTS),
            subtitle: as_string(field(props, "subtitle"), ""),
            description: as_string(field(props, "description"), ""),
            buttons: Button::list(props, "buttons", lint),
            trust_indicators,
            image,
            title,
        }
    }

    fn has_minimum_content(&self) -> bool {
        [&self.title, &self.subtitle, &self.description]
            .iter()
            .any(|text| !text.trim().is_empty())
            || !self.buttons.is_empty()
            || !self.trust_indicators.is_empty()
            || self.image.is_some()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        html::open(out, "div", "hero__content", &[]);
        html::element(out, "h1", "hero__title", &self.title);
        html::element(out, "p", "hero__subtitle", &self.subtitle);
        html::element(out, "p", "hero__description", &self.description);
        common::write_buttons(out, &self.buttons);
        if !self.trust_indicators.is_empty() {
            html::open(out, "ul", "hero__trust", &[]);
            for indicator in &self.trust_indicators {
                html::element(out, "li", "hero__trust-item", indicator);
            }
            html::close(out, "ul");
        }
        html::close(out, "div");

        if let Some(image) = &self.image
            && self.layout != "minimal"
        {
            html::open(out, "figure", "hero__media", &[]);
            image.write(out, "hero__image");
            html::close(out, "figure");
        }
    }
}
