//! Features section: a grid of titled cards.

use serde_json::Value;

use super::common::{self, Header, ImageRef, LinkRef};
use super::{Lint, SectionProps};
use crate::access::{as_string, field};
use crate::html;
use crate::section::SectionKind;

#[derive(Debug)]
struct Feature {
    title: String,
    description: String,
    icon: String,
    image: Option<ImageRef>,
    link: Option<LinkRef>,
}

#[derive(Debug)]
pub(crate) struct FeaturesProps {
    header: Header,
    columns: u64,
    items: Vec<Feature>,
}

impl SectionProps for FeaturesProps {
    const KIND: SectionKind = SectionKind::Features;
    const MINIMUM: &'static str = "needs at least one item with a title";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let items = common::keep_items(props, "items", &["title"], lint)
            .into_iter()
            .map(|item| {
                let title = as_string(field(item, "title"), "");
                // Icons are either a bare glyph or `{type, value}`.
                let icon = match field(item, "icon") {
                    Value::String(glyph) => glyph.clone(),
                    icon => as_string(field(icon, "value"), ""),
                };
                Feature {
                    description: as_string(field(item, "description"), ""),
                    icon,
                    image: ImageRef::from_value(field(item, "image"), &title),
                    link: LinkRef::from_value(field(item, "link"), "Learn more"),
                    title,
                }
            })
            .collect();

        Self {
            header: Header::extract(props, &["subtitle", "description"]),
            columns: common::columns(props, 3, lint),
            items,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.items.is_empty()
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        let grid_class = format!("features__grid columns-{}", self.columns);
        html::open(out, "div", &grid_class, &[]);
        for item in &self.items {
            html::open(out, "article", "feature", &[]);
            if let Some(image) = &item.image {
                image.write(out, "feature__image");
            }
            html::element(out, "span", "feature__icon", &item.icon);
            html::element(out, "h3", "feature__title", &item.title);
            html::element(out, "p", "feature__description", &item.description);
            if let Some(link) = &item.link {
                link.write(out, "feature__link");
            }
            html::close(out, "article");
        }
        html::close(out, "div");
    }
}
