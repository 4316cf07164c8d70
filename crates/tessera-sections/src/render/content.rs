//! Content section: text block beside an image or video.

use serde_json::Value;

use super::common::{self, Button};
use super::{Lint, SectionProps};
use crate::access::{as_string, as_text, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["left-right", "right-left", "centered"];

#[derive(Debug)]
pub(crate) struct ContentProps {
    layout: String,
    title: String,
    subtitle: String,
    content: String,
    image: String,
    image_alt: String,
    video: String,
    buttons: Vec<Button>,
}

impl ContentProps {
    fn has_media(&self) -> bool {
        !self.image.trim().is_empty() || !self.video.trim().is_empty()
    }

    fn write_text(&self, out: &mut String) {
        html::open(out, "div", "content__text", &[]);
        html::element(out, "p", "content__eyebrow", &self.subtitle);
        html::element(out, "h2", "content__title", &self.title);
        for paragraph in self.content.split("\n\n") {
            html::element(out, "p", "content__paragraph", paragraph.trim());
        }
        common::write_buttons(out, &self.buttons);
        html::close(out, "div");
    }

    fn write_media(&self, out: &mut String) {
        html::open(out, "div", "content__media", &[]);
        if self.video.trim().is_empty() {
            html::image(out, &self.image, &self.image_alt, "content__image");
        } else {
            html::open_with_flags(
                out,
                "video",
                "content__video",
                &[("src", self.video.as_str()), ("poster", self.image.as_str())],
                &["controls"],
            );
            html::close(out, "video");
        }
        html::close(out, "div");
    }
}

impl SectionProps for ContentProps {
    const KIND: SectionKind = SectionKind::Content;
    const MINIMUM: &'static str = "needs a title, content or image";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let title = as_string(field(props, "title"), "");
        let image = as_string(field(props, "image"), "");
        let video = as_string(field(props, "video"), "");
        let layout = common::layout(props, "left-right", LAYOUTS);
        let layout = if image.trim().is_empty() && video.trim().is_empty() {
            "centered".to_owned()
        } else {
            layout
        };

        Self {
            layout,
            subtitle: as_string(field(props, "subtitle"), ""),
            content: as_string(field(props, "content"), ""),
            image_alt: as_text(field(props, "imageAlt"), &title),
            buttons: Button::list(props, "buttons", lint),
            title,
            image,
            video,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.content.trim().is_empty()
            || !self.image.trim().is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        match (self.has_media(), self.layout.as_str()) {
            (false, _) | (true, "centered") => {
                self.write_text(out);
                if self.has_media() {
                    self.write_media(out);
                }
            }
            (true, "right-left") => {
                self.write_media(out);
                self.write_text(out);
            }
            (true, _) => {
                self.write_text(out);
                self.write_media(out);
            }
        }
    }
}
