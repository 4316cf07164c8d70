//! Testimonials section: quotes with author, rating and an optional trust
//! badge. The carousel layout renders its first slide as active.

use serde_json::Value;

use super::common::{self, Header};
use super::{Lint, SectionProps};
use crate::access::{as_string, as_text, as_u64, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["carousel", "grid", "masonry", "single"];
const MAX_RATING: u64 = 5;

#[derive(Debug)]
struct Testimonial {
    content: String,
    author_name: String,
    author_role: String,
    company: String,
    avatar: String,
    rating: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct TestimonialsProps {
    header: Header,
    layout: String,
    trust_badge: String,
    items: Vec<Testimonial>,
}

impl Testimonial {
    fn from_value(item: &Value) -> Self {
        let author = field(item, "author");
        let company = [field(author, "company"), field(item, "company")]
            .into_iter()
            .map(|value| as_string(value, ""))
            .find(|company| !company.trim().is_empty())
            .unwrap_or_default();
        Self {
            content: as_string(field(item, "content"), ""),
            author_name: as_text(field(author, "name"), "Anonymous"),
            author_role: as_string(field(author, "role"), ""),
            company,
            avatar: as_string(field(author, "avatar"), ""),
            rating: as_u64(field(item, "rating")).map(|rating| rating.min(MAX_RATING)),
        }
    }

    fn write(&self, out: &mut String, active: bool) {
        let class = if active {
            "testimonial is-active"
        } else {
            "testimonial"
        };
        html::open(out, "figure", class, &[]);
        if let Some(rating) = self.rating {
            let label = format!("{rating} out of {MAX_RATING}");
            html::open(
                out,
                "div",
                "testimonial__rating",
                &[("aria-label", label.as_str())],
            );
            for star in 0..MAX_RATING {
                let class = if star < rating { "star star--filled" } else { "star" };
                html::open(out, "span", class, &[]);
                html::close(out, "span");
            }
            html::close(out, "div");
        }
        html::open(out, "blockquote", "testimonial__content", &[]);
        html::element(out, "p", "", &self.content);
        html::close(out, "blockquote");
        html::open(out, "figcaption", "testimonial__author", &[]);
        html::image(out, &self.avatar, &self.author_name, "testimonial__avatar");
        html::element(out, "cite", "testimonial__name", &self.author_name);
        let role = [self.author_role.as_str(), self.company.as_str()]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        html::element(out, "span", "testimonial__role", &role);
        html::close(out, "figcaption");
        html::close(out, "figure");
    }
}

impl SectionProps for TestimonialsProps {
    const KIND: SectionKind = SectionKind::Testimonials;
    const MINIMUM: &'static str = "needs at least one item with content";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let items = common::keep_items(props, "items", &["content"], lint)
            .into_iter()
            .map(Testimonial::from_value)
            .collect();
        Self {
            header: Header::extract(props, &["subtitle", "description"]),
            layout: common::layout(props, "carousel", LAYOUTS),
            trust_badge: as_string(field(props, "trustBadge"), ""),
            items,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.items.is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        let carousel = self.layout == "carousel";
        html::open(out, "div", "testimonials__items", &[]);
        for (index, item) in self.items.iter().enumerate() {
            item.write(out, carousel && index == 0);
        }
        html::close(out, "div");
        if carousel && self.items.len() > 1 {
            html::open(out, "nav", "testimonials__dots", &[]);
            for index in 0..self.items.len() {
                let class = if index == 0 { "dot is-active" } else { "dot" };
                let label = format!("Show testimonial {}", index + 1);
                html::open(
                    out,
                    "button",
                    class,
                    &[("type", "button"), ("aria-label", label.as_str())],
                );
                html::close(out, "button");
            }
            html::close(out, "nav");
        }
        html::element(out, "p", "testimonials__badge", &self.trust_badge);
    }
}
