//! Logo cloud section: partner and client logos, optionally linked.

use serde_json::Value;

use super::common::{self, Header, ImageRef};
use super::{Lint, SectionProps};
use crate::access::{as_array, as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["grid", "marquee"];

#[derive(Debug)]
struct Logo {
    image: ImageRef,
    link: String,
}

#[derive(Debug)]
pub(crate) struct LogoCloudProps {
    header: Header,
    layout: String,
    logos: Vec<Logo>,
}

impl SectionProps for LogoCloudProps {
    const KIND: SectionKind = SectionKind::LogoCloud;
    const MINIMUM: &'static str = "needs at least one logo with a source";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let mut logos = Vec::new();
        for (index, value) in as_array(field(props, "logos")).iter().enumerate() {
            let default_alt = format!("Partner {}", index + 1);
            let Some(image) = ImageRef::from_value(value, &default_alt) else {
                lint.dropped("logos", index, "src");
                continue;
            };
            let link = ["link", "href"]
                .iter()
                .map(|key| as_string(field(value, key), ""))
                .find(|link| !link.trim().is_empty())
                .unwrap_or_default();
            logos.push(Logo { image, link });
        }

        Self {
            header: Header::extract(props, &["description", "subtitle"]),
            layout: common::layout(props, "grid", LAYOUTS),
            logos,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.logos.is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        html::open(out, "ul", "logo-cloud__logos", &[]);
        for logo in &self.logos {
            html::open(out, "li", "logo-cloud__item", &[]);
            if logo.link.trim().is_empty() {
                logo.image.write(out, "logo-cloud__logo");
            } else {
                html::open(
                    out,
                    "a",
                    "logo-cloud__link",
                    &[("href", logo.link.as_str()), ("rel", "noopener")],
                );
                logo.image.write(out, "logo-cloud__logo");
                html::close(out, "a");
            }
            html::close(out, "li");
        }
        html::close(out, "ul");
    }
}
