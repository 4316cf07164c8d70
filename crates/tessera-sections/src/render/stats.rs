//! Stats section: key metrics with optional prefix and suffix.

use serde_json::Value;

use super::common::{self, Header};
use super::{Lint, SectionProps};
use crate::access::{as_bool, as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["grid", "inline", "centered", "split"];

#[derive(Debug)]
struct Stat {
    label: String,
    value: String,
    prefix: String,
    suffix: String,
    description: String,
    animation: bool,
}

#[derive(Debug)]
pub(crate) struct StatsProps {
    header: Header,
    layout: String,
    items: Vec<Stat>,
}

impl SectionProps for StatsProps {
    const KIND: SectionKind = SectionKind::Stats;
    const MINIMUM: &'static str = "needs at least one item with a label";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let items = common::keep_items(props, "items", &["label"], lint)
            .into_iter()
            .map(|item| Stat {
                label: as_string(field(item, "label"), ""),
                value: as_string(field(item, "value"), ""),
                prefix: as_string(field(item, "prefix"), ""),
                suffix: as_string(field(item, "suffix"), ""),
                description: as_string(field(item, "description"), ""),
                animation: as_bool(field(item, "animation"), true),
            })
            .collect();

        Self {
            header: Header::extract(props, &["subtitle", "description"]),
            layout: common::layout(props, "grid", LAYOUTS),
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
        html::open(out, "dl", "stats__list", &[]);
        for item in &self.items {
            // Counters start from their final value; animation is a client hint.
            let animate = if item.animation { "true" } else { "false" };
            html::open(out, "div", "stat", &[("data-animate", animate)]);
            html::element(out, "dt", "stat__label", &item.label);
            html::open(out, "dd", "stat__value", &[]);
            html::element(out, "span", "stat__prefix", &item.prefix);
            html::element(out, "span", "stat__number", &item.value);
            html::element(out, "span", "stat__suffix", &item.suffix);
            html::close(out, "dd");
            html::element(out, "dd", "stat__description", &item.description);
            html::close(out, "div");
        }
        html::close(out, "dl");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_value_with_affixes() {
        let html = render(
            SectionKind::Stats,
            json!({"items": [{"label": "Uptime", "value": 99.9, "suffix": "%"}]}),
        )
        .unwrap();
        assert!(html.contains("layout--grid"));
        assert!(html.contains(r#"<span class="stat__number">99.9</span>"#));
        assert!(html.contains(r#"<span class="stat__suffix">%</span>"#));
        assert!(html.contains(r#"data-animate="true""#));
    }

    #[test]
    fn test_animation_can_be_disabled() {
        let html = render(
            SectionKind::Stats,
            json!({"items": [{"label": "Users", "value": "10k", "animation": false}]}),
        )
        .unwrap();
        assert!(html.contains(r#"data-animate="false""#));
    }

    #[test]
    fn test_items_need_label() {
        assert_eq!(
            render(SectionKind::Stats, json!({"items": [{"value": 5}]})),
            None
        );
    }
}
