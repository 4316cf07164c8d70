//! Call-to-action section.

use serde_json::Value;

use super::common::{self, Button, ImageRef};
use super::{Lint, SectionProps};
use crate::access::{as_string, as_text, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["centered", "split", "banner"];
const ALIGNMENTS: &[&str] = &["left", "center", "right"];

#[derive(Debug)]
pub(crate) struct CtaProps {
    layout: String,
    background: String,
    alignment: String,
    badge: String,
    title: String,
    description: String,
    buttons: Vec<Button>,
    image: Option<ImageRef>,
}

impl SectionProps for CtaProps {
    const KIND: SectionKind = SectionKind::Cta;
    const MINIMUM: &'static str = "needs a title, description or button";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let image_alt = as_text(field(props, "imageAlt"), "CTA illustration");

        Self {
            layout: common::layout(props, "centered", LAYOUTS),
            background: as_text(field(props, "background"), "gradient"),
            alignment: common::choice(props, "alignment", "center", ALIGNMENTS),
            badge: as_string(field(props, "badge"), ""),
            title: as_string(field(props, "title"), ""),
            description: as_string(field(props, "description"), ""),
            buttons: Button::list(props, "buttons", lint),
            image: ImageRef::from_value(field(props, "image"), &image_alt),
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.description.trim().is_empty()
            || !self.buttons.is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        let class = format!(
            "cta__inner cta--bg-{} align-{}",
            self.background, self.alignment
        );
        html::open(out, "div", &class, &[]);
        html::open(out, "div", "cta__content", &[]);
        html::element(out, "span", "cta__badge", &self.badge);
        html::element(out, "h2", "cta__title", &self.title);
        html::element(out, "p", "cta__description", &self.description);
        common::write_buttons(out, &self.buttons);
        html::close(out, "div");
        if let Some(image) = &self.image
            && self.layout == "split"
        {
            image.write(out, "cta__image");
        }
        html::close(out, "div");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{lint, render};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let html = render(SectionKind::Cta, json!({"title": "Ready?"})).unwrap();
        assert!(html.contains("layout--centered"));
        assert!(html.contains("cta--bg-gradient align-center"));
        assert!(html.contains("Ready?"));
    }

    #[test]
    fn test_button_only_is_enough() {
        let html = render(
            SectionKind::Cta,
            json!({"buttons": [{"text": "Sign up", "href": "/signup"}]}),
        )
        .unwrap();
        assert!(
            html.contains(r#"<a class="button button--primary" href="/signup">Sign up</a>"#)
        );
    }

    #[test]
    fn test_textless_buttons_do_not_count() {
        let props = json!({"buttons": [{"href": "/signup"}]});
        assert_eq!(render(SectionKind::Cta, props.clone()), None);
        assert_eq!(lint(SectionKind::Cta, props).len(), 2);
    }

    #[test]
    fn test_invalid_alignment_falls_back() {
        let html = render(
            SectionKind::Cta,
            json!({"title": "x", "alignment": "diagonal"}),
        )
        .unwrap();
        assert!(html.contains("align-center"));
    }

    #[test]
    fn test_split_layout_shows_image() {
        let html = render(
            SectionKind::Cta,
            json!({"layout": "split", "title": "x", "image": "/cta.png"}),
        )
        .unwrap();
        assert!(html.contains(r#"alt="CTA illustration""#));
    }
}
