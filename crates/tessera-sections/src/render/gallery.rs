//! Gallery section: images with optional captions.

use serde_json::Value;

use super::common::{self, Header, ImageRef};
use super::{Lint, SectionProps};
use crate::access::{as_array, as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["grid", "masonry", "carousel"];

#[derive(Debug)]
struct GalleryImage {
    image: ImageRef,
    title: String,
    description: String,
}

#[derive(Debug)]
pub(crate) struct GalleryProps {
    header: Header,
    layout: String,
    columns: u64,
    images: Vec<GalleryImage>,
}

impl SectionProps for GalleryProps {
    const KIND: SectionKind = SectionKind::Gallery;
    const MINIMUM: &'static str = "needs at least one image with a source";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let mut images = Vec::new();
        for (index, value) in as_array(field(props, "images")).iter().enumerate() {
            let default_alt = format!("Gallery image {}", index + 1);
            let Some(image) = ImageRef::from_value(value, &default_alt) else {
                lint.dropped("images", index, "src");
                continue;
            };
            images.push(GalleryImage {
                image,
                title: as_string(field(value, "title"), ""),
                description: as_string(field(value, "description"), ""),
            });
        }

        Self {
            header: Header::extract(props, &["description", "subtitle"]),
            layout: common::layout(props, "grid", LAYOUTS),
            columns: common::columns(props, 3, lint),
            images,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.images.is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        let class = format!("gallery__images columns-{}", self.columns);
        html::open(out, "div", &class, &[]);
        for item in &self.images {
            html::open(out, "figure", "gallery__item", &[]);
            item.image.write(out, "gallery__image");
            if !item.title.trim().is_empty() || !item.description.trim().is_empty() {
                html::open(out, "figcaption", "gallery__caption", &[]);
                html::element(out, "strong", "", &item.title);
                html::element(out, "span", "", &item.description);
                html::close(out, "figcaption");
            }
            html::close(out, "figure");
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
    fn test_string_and_object_images() {
        let html = render(
            SectionKind::Gallery,
            json!({"images": ["/1.jpg", {"src": "/2.jpg", "title": "Office"}]}),
        )
        .unwrap();
        assert!(html.contains(r#"src="/1.jpg" alt="Gallery image 1""#));
        assert!(html.contains(r#"src="/2.jpg" alt="Gallery image 2""#));
        assert!(html.contains("<strong>Office</strong>"));
        assert!(html.contains("layout--grid"));
        assert!(html.contains("columns-3"));
    }

    #[test]
    fn test_alt_numbering_follows_source_position() {
        let html = render(SectionKind::Gallery, json!({"images": [{}, "/b.jpg"]})).unwrap();
        assert!(html.contains(r#"alt="Gallery image 2""#));
    }

    #[test]
    fn test_sourceless_images() {
        let props = json!({"title": "Photos", "images": [{"alt": "x"}, ""]});
        assert_eq!(render(SectionKind::Gallery, props.clone()), None);
        let warnings = lint(SectionKind::Gallery, props);
        assert_eq!(warnings[0], "images[0] dropped: missing src");
        assert_eq!(warnings[1], "images[1] dropped: missing src");
    }
}
