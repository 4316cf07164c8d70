//! FAQ section: question and answer pairs rendered as disclosure widgets,
//! first one open.

use std::fmt::Write;

use serde_json::Value;

use super::common::{self, Header};
use super::{Lint, SectionProps};
use crate::access::{as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["single", "two-column"];

#[derive(Debug)]
struct Question {
    question: String,
    answer: String,
}

#[derive(Debug)]
pub(crate) struct FaqProps {
    header: Header,
    layout: String,
    items: Vec<Question>,
}

impl SectionProps for FaqProps {
    const KIND: SectionKind = SectionKind::Faq;
    const MINIMUM: &'static str = "needs at least one item with both a question and an answer";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let items = common::keep_items(props, "items", &["question", "answer"], lint)
            .into_iter()
            .map(|item| Question {
                question: as_string(field(item, "question"), ""),
                answer: as_string(field(item, "answer"), ""),
            })
            .collect();
        Self {
            header: Header::extract(props, &["description", "subtitle"]),
            layout: common::layout(props, "single", LAYOUTS),
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
        html::open(out, "div", "faq__items", &[]);
        for (index, item) in self.items.iter().enumerate() {
            let open = if index == 0 { " open" } else { "" };
            let _ = write!(out, r#"<details class="faq__item"{open}>"#);
            html::element(out, "summary", "faq__question", &item.question);
            html::element(out, "div", "faq__answer", &item.answer);
            html::close(out, "details");
        }
        html::close(out, "div");
    }
}
