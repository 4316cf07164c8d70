//! Contact section: contact details and an optional form.

use serde_json::Value;

use super::common::Header;
use super::{Lint, SectionProps};
use crate::access::{
    NULL, as_array, as_bool, as_string, as_text, field, get_nested, has_content,
};
use crate::html;
use crate::section::SectionKind;

const FIELD_TYPES: &[&str] = &["text", "email", "tel", "textarea", "select"];

#[derive(Debug, PartialEq, Eq)]
struct FormField {
    name: String,
    label: String,
    input_type: String,
    placeholder: String,
    required: bool,
    options: Vec<String>,
}

impl FormField {
    fn new(name: &str, label: &str, input_type: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            input_type: input_type.to_owned(),
            placeholder: String::new(),
            required: true,
            options: Vec::new(),
        }
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("name", "Name", "text"),
            Self::new("email", "Email", "email"),
            Self::new("message", "Message", "textarea"),
        ]
    }

    fn from_value(value: &Value) -> Option<Self> {
        let name = as_string(field(value, "name"), "");
        if name.trim().is_empty() {
            return None;
        }
        let input_type = as_string(field(value, "type"), "text");
        let input_type = if FIELD_TYPES.iter().any(|known| *known == input_type) {
            input_type
        } else {
            "text".to_owned()
        };
        Some(Self {
            label: as_text(field(value, "label"), &name),
            placeholder: as_string(field(value, "placeholder"), ""),
            required: as_bool(field(value, "required"), false),
            options: as_array(field(value, "options"))
                .iter()
                .map(|option| as_string(option, ""))
                .filter(|option| !option.trim().is_empty())
                .collect(),
            input_type,
            name,
        })
    }

    fn write(&self, out: &mut String) {
        let id = format!("contact-{}", self.name);
        let flags: &[&str] = if self.required { &["required"] } else { &[] };
        html::open(out, "div", "form__field", &[]);
        html::open(out, "label", "form__label", &[("for", id.as_str())]);
        out.push_str(&html::escape_html(&self.label));
        html::close(out, "label");
        let attrs = [
            ("id", id.as_str()),
            ("name", self.name.as_str()),
            ("placeholder", self.placeholder.as_str()),
        ];
        match self.input_type.as_str() {
            "textarea" => {
                html::open_with_flags(out, "textarea", "form__input", &attrs, flags);
                html::close(out, "textarea");
            }
            "select" => {
                html::open_with_flags(out, "select", "form__input", &attrs, flags);
                for option in &self.options {
                    html::element(out, "option", "", option);
                }
                html::close(out, "select");
            }
            input_type => {
                let mut attrs = attrs.to_vec();
                attrs.insert(0, ("type", input_type));
                html::open_with_flags(out, "input", "form__input", &attrs, flags);
            }
        }
        html::close(out, "div");
    }
}

#[derive(Debug)]
struct ContactForm {
    action: String,
    submit_text: String,
    fields: Vec<FormField>,
}

impl ContactForm {
    fn extract(props: &Value, lint: &mut Lint) -> Option<Self> {
        let form = field(props, "form");
        let enabled = match form {
            Value::Bool(enabled) => *enabled,
            other => has_content(other) || as_bool(field(props, "showForm"), false),
        };
        if !enabled {
            return None;
        }

        let (list_name, raw_fields) = if field(form, "fields").is_array() {
            ("form.fields", field(form, "fields"))
        } else {
            ("fields", field(props, "fields"))
        };
        let mut fields = Vec::new();
        for (index, value) in as_array(raw_fields).iter().enumerate() {
            match FormField::from_value(value) {
                Some(form_field) => fields.push(form_field),
                None => lint.dropped(list_name, index, "name"),
            }
        }
        if fields.is_empty() {
            fields = FormField::defaults();
        }

        let action = [
            field(form, "action"),
            field(props, "formAction"),
            field(props, "action"),
        ]
        .into_iter()
        .map(|value| as_string(value, ""))
        .find(|action| !action.trim().is_empty())
        .unwrap_or_else(|| "#".to_owned());
        let submit_text = [
            field(form, "submitText"),
            get_nested(props, "submitButton.text", &NULL),
        ]
        .into_iter()
        .map(|value| as_string(value, ""))
        .find(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "Send Message".to_owned());

        Some(Self {
            action,
            submit_text,
            fields,
        })
    }

    fn write(&self, out: &mut String) {
        html::open(
            out,
            "form",
            "contact__form",
            &[("action", self.action.as_str()), ("method", "post")],
        );
        for form_field in &self.fields {
            form_field.write(out);
        }
        html::open(out, "button", "button button--primary", &[("type", "submit")]);
        out.push_str(&html::escape_html(&self.submit_text));
        html::close(out, "button");
        html::close(out, "form");
    }
}

#[derive(Debug)]
pub(crate) struct ContactProps {
    header: Header,
    email: String,
    phone: String,
    address: String,
    form: Option<ContactForm>,
}

impl SectionProps for ContactProps {
    const KIND: SectionKind = SectionKind::Contact;
    const MINIMUM: &'static str = "needs a title, email, phone or form";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        Self {
            header: Header::extract(props, &["description", "subtitle"]),
            email: as_string(field(props, "email"), ""),
            phone: as_string(field(props, "phone"), ""),
            address: as_string(field(props, "address"), ""),
            form: ContactForm::extract(props, lint),
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.header.title.trim().is_empty()
            || !self.email.trim().is_empty()
            || !self.phone.trim().is_empty()
            || self.form.is_some()
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        html::open(out, "div", "contact__body", &[]);
        if [&self.email, &self.phone, &self.address]
            .iter()
            .any(|detail| !detail.trim().is_empty())
        {
            html::open(out, "address", "contact__details", &[]);
            if !self.email.trim().is_empty() {
                let href = format!("mailto:{}", self.email);
                html::link(out, &href, "contact__email", &self.email);
            }
            if !self.phone.trim().is_empty() {
                let href = format!("tel:{}", self.phone);
                html::link(out, &href, "contact__phone", &self.phone);
            }
            html::element(out, "p", "contact__address", &self.address);
            html::close(out, "address");
        }
        if let Some(form) = &self.form {
            form.write(out);
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
    fn test_details_only() {
        let html = render(
            SectionKind::Contact,
            json!({"email": "hi@example.com", "phone": "+1 555"}),
        )
        .unwrap();
        assert!(html.contains(r#"href="mailto:hi@example.com""#));
        assert!(html.contains(r#"href="tel:+1 555""#));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_form_defaults() {
        let html = render(SectionKind::Contact, json!({"form": true})).unwrap();
        assert!(html.contains(r##"<form class="contact__form" action="#" method="post">"##));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(
            r#"<textarea class="form__input" id="contact-message" name="message" required>"#
        ));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_form_false_disables_form() {
        assert_eq!(render(SectionKind::Contact, json!({"form": false})), None);
    }

    #[test]
    fn test_show_form_flag() {
        let html = render(
            SectionKind::Contact,
            json!({"email": "hi@example.com", "showForm": "true"}),
        )
        .unwrap();
        assert!(html.contains("<form"));
        let html = render(
            SectionKind::Contact,
            json!({"email": "hi@example.com", "form": false, "showForm": true}),
        )
        .unwrap();
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_custom_fields_drop_nameless() {
        let props = json!({
            "title": "Talk to us",
            "formAction": "/api/contact",
            "form": {"fields": [
                {"name": "company", "label": "Company"},
                {"label": "No name"},
                {"name": "topic", "type": "select", "options": ["Sales", "Support"]}
            ]}
        });
        let html = render(SectionKind::Contact, props.clone()).unwrap();
        assert!(html.contains(r#"action="/api/contact""#));
        assert!(html.contains(r#"name="company""#));
        assert!(html.contains("<option>Support</option>"));
        assert!(!html.contains("No name"));
        assert!(!html.contains(r#"name="message""#));

        let warnings = lint(SectionKind::Contact, props);
        assert_eq!(warnings, vec!["form.fields[1] dropped: missing name".to_owned()]);
    }

    #[test]
    fn test_description_alone_is_not_enough() {
        assert_eq!(
            render(SectionKind::Contact, json!({"description": "Reach out"})),
            None
        );
    }
}
