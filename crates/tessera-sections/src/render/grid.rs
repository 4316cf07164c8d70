//! Grid section: generic cards with image, category and link.

use serde_json::Value;

use super::common::{self, Header, ImageRef, LinkRef};
use super::{Lint, SectionProps};
use crate::access::{as_array, as_bool, as_string, field, get_nested, NULL};
use crate::html;
use crate::section::SectionKind;

#[derive(Debug)]
struct GridItem {
    title: String,
    description: String,
    category: String,
    image: Option<ImageRef>,
    link: Option<LinkRef>,
}

#[derive(Debug)]
pub(crate) struct GridProps {
    header: Header,
    columns: u64,
    categories: Vec<String>,
    items: Vec<GridItem>,
}

impl SectionProps for GridProps {
    const KIND: SectionKind = SectionKind::Grid;
    const MINIMUM: &'static str = "needs at least one item with a title";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let items = common::keep_items(props, "items", &["title"], lint)
            .into_iter()
            .map(|item| {
                let title = as_string(field(item, "title"), "");
                GridItem {
                    description: as_string(field(item, "description"), ""),
                    category: as_string(field(item, "category"), ""),
                    image: ImageRef::from_value(field(item, "image"), &title),
                    link: LinkRef::from_value(field(item, "link"), "View"),
                    title,
                }
            })
            .collect();

        let categories = if as_bool(get_nested(props, "filters.enabled", &NULL), false) {
            as_array(get_nested(props, "filters.categories", &NULL))
                .iter()
                .map(|category| as_string(category, ""))
                .filter(|category| !category.trim().is_empty())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            header: Header::extract(props, &["subtitle", "description"]),
            columns: common::columns(props, 3, lint),
            categories,
            items,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.items.is_empty()
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        if !self.categories.is_empty() {
            html::open(out, "nav", "grid__filters", &[]);
            html::element(out, "button", "filter is-active", "All");
            for category in &self.categories {
                html::open(
                    out,
                    "button",
                    "filter",
                    &[("type", "button"), ("data-category", category.as_str())],
                );
                out.push_str(&html::escape_html(category));
                html::close(out, "button");
            }
            html::close(out, "nav");
        }
        let grid_class = format!("grid__items columns-{}", self.columns);
        html::open(out, "div", &grid_class, &[]);
        for item in &self.items {
            html::open(
                out,
                "article",
                "grid-item",
                &[("data-category", item.category.as_str())],
            );
            if let Some(image) = &item.image {
                image.write(out, "grid-item__image");
            }
            html::element(out, "span", "grid-item__category", &item.category);
            html::element(out, "h3", "grid-item__title", &item.title);
            html::element(out, "p", "grid-item__description", &item.description);
            if let Some(link) = &item.link {
                link.write(out, "grid-item__link");
            }
            html::close(out, "article");
        }
        html::close(out, "div");
    }
}
