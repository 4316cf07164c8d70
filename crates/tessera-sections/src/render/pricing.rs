//! Pricing section: plan cards with price, feature list and a signup button.

use serde_json::Value;

use super::common::Header;
use super::{Lint, SectionProps};
use crate::access::{as_array, as_bool, as_string, as_text, field, has_content};
use crate::html;
use crate::section::SectionKind;

#[derive(Debug)]
struct PlanFeature {
    text: String,
    included: bool,
}

#[derive(Debug)]
struct Plan {
    name: String,
    description: String,
    price: String,
    period: String,
    features: Vec<PlanFeature>,
    button_text: String,
    button_href: String,
    featured: bool,
    badge: String,
}

#[derive(Debug)]
pub(crate) struct PricingProps {
    header: Header,
    plans: Vec<Plan>,
}

/// Price is either a scalar or `{monthly, currency, period}`.
fn price_and_period(plan: &Value) -> (String, String) {
    let price = field(plan, "price");
    if price.is_object() {
        let currency = as_string(field(price, "currency"), "");
        let amount = as_string(field(price, "monthly"), "");
        let amount = if amount.trim().is_empty() {
            amount
        } else {
            format!("{currency}{amount}")
        };
        let period = as_text(field(price, "period"), "");
        let period = if period.is_empty() {
            as_text(field(plan, "period"), "month")
        } else {
            period
        };
        (amount, period)
    } else {
        (as_string(price, ""), as_text(field(plan, "period"), "month"))
    }
}

fn plan_features(plan: &Value, plan_index: usize, lint: &mut Lint) -> Vec<PlanFeature> {
    as_array(field(plan, "features"))
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let (text, included) = match feature {
                Value::Object(_) => (
                    as_string(field(feature, "text"), ""),
                    as_bool(field(feature, "included"), true),
                ),
                other => (as_string(other, ""), true),
            };
            if text.trim().is_empty() {
                lint.dropped(&format!("plans[{plan_index}].features"), index, "text");
                return None;
            }
            Some(PlanFeature { text, included })
        })
        .collect()
}

fn first_text(candidates: &[&Value], default: &str) -> String {
    candidates
        .iter()
        .map(|value| as_string(value, ""))
        .find(|text| !text.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

impl Plan {
    fn extract(plan: &Value, index: usize, lint: &mut Lint) -> Self {
        let cta = field(plan, "cta");
        let button_text = first_text(
            &[field(plan, "buttonText"), field(cta, "text")],
            "Get Started",
        );
        let button_href = first_text(&[field(plan, "buttonHref"), field(cta, "href")], "#");
        let (price, period) = price_and_period(plan);

        Self {
            name: as_string(field(plan, "name"), ""),
            description: as_string(field(plan, "description"), ""),
            price,
            period,
            features: plan_features(plan, index, lint),
            button_text,
            button_href,
            featured: as_bool(field(plan, "featured"), false),
            badge: as_string(field(plan, "badge"), ""),
        }
    }

    fn write(&self, out: &mut String) {
        let class = if self.featured {
            "plan plan--featured"
        } else {
            "plan"
        };
        html::open(out, "article", class, &[]);
        html::element(out, "span", "plan__badge", &self.badge);
        html::element(out, "h3", "plan__name", &self.name);
        html::element(out, "p", "plan__description", &self.description);
        if !self.price.trim().is_empty() {
            html::open(out, "p", "plan__price", &[]);
            html::element(out, "span", "plan__amount", &self.price);
            html::element(out, "span", "plan__period", &format!("/{}", self.period));
            html::close(out, "p");
        }
        if !self.features.is_empty() {
            html::open(out, "ul", "plan__features", &[]);
            for feature in &self.features {
                let class = if feature.included {
                    "plan__feature is-included"
                } else {
                    "plan__feature is-excluded"
                };
                html::element(out, "li", class, &feature.text);
            }
            html::close(out, "ul");
        }
        let button_class = if self.featured {
            "button button--primary"
        } else {
            "button button--outline"
        };
        html::link(out, &self.button_href, button_class, &self.button_text);
        html::close(out, "article");
    }
}

impl SectionProps for PricingProps {
    const KIND: SectionKind = SectionKind::Pricing;
    const MINIMUM: &'static str = "needs at least one plan with a name";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let mut plans = Vec::new();
        for (index, plan) in as_array(field(props, "plans")).iter().enumerate() {
            if !has_content(field(plan, "name")) {
                lint.dropped("plans", index, "name");
                continue;
            }
            plans.push(Plan::extract(plan, index, lint));
        }
        Self {
            header: Header::extract(props, &["description", "subtitle"]),
            plans,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.plans.is_empty()
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        html::open(out, "div", "pricing__plans", &[]);
        for plan in &self.plans {
            plan.write(out);
        }
        html::close(out, "div");
    }
}
