//! Team section: member cards with photo, role, bio and social links.

use serde_json::Value;

use super::common::{self, Header, ImageRef};
use super::{Lint, SectionProps};
use crate::access::{as_array, as_string, field};
use crate::html;
use crate::section::SectionKind;

const LAYOUTS: &[&str] = &["grid", "carousel", "list"];

#[derive(Debug)]
struct SocialLink {
    platform: String,
    url: String,
}

#[derive(Debug)]
struct Member {
    name: String,
    role: String,
    bio: String,
    image: Option<ImageRef>,
    social: Vec<SocialLink>,
}

#[derive(Debug)]
pub(crate) struct TeamProps {
    header: Header,
    layout: String,
    columns: u64,
    members: Vec<Member>,
}

fn social_links(member: &Value, member_index: usize, lint: &mut Lint) -> Vec<SocialLink> {
    as_array(field(member, "social"))
        .iter()
        .enumerate()
        .filter_map(|(index, link)| {
            let url = as_string(field(link, "url"), "");
            if url.trim().is_empty() {
                lint.dropped(&format!("members[{member_index}].social"), index, "url");
                return None;
            }
            Some(SocialLink {
                platform: as_string(field(link, "platform"), "link"),
                url,
            })
        })
        .collect()
}

impl SectionProps for TeamProps {
    const KIND: SectionKind = SectionKind::Team;
    const MINIMUM: &'static str = "needs at least one member with a name";

    fn extract(props: &Value, lint: &mut Lint) -> Self {
        let mut members = Vec::new();
        for (index, member) in as_array(field(props, "members")).iter().enumerate() {
            let name = as_string(field(member, "name"), "");
            if name.trim().is_empty() {
                lint.dropped("members", index, "name");
                continue;
            }
            members.push(Member {
                role: as_string(field(member, "role"), ""),
                bio: as_string(field(member, "bio"), ""),
                image: ImageRef::from_value(field(member, "image"), &name),
                social: social_links(member, index, lint),
                name,
            });
        }

        Self {
            header: Header::extract(props, &["subtitle", "description"]),
            layout: common::layout(props, "grid", LAYOUTS),
            columns: common::columns(props, 3, lint),
            members,
        }
    }

    fn has_minimum_content(&self) -> bool {
        !self.members.is_empty()
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn write_body(&self, out: &mut String) {
        self.header.write(out);
        let grid_class = format!("team__grid columns-{}", self.columns);
        html::open(out, "div", &grid_class, &[]);
        for member in &self.members {
            html::open(out, "article", "member", &[]);
            if let Some(image) = &member.image {
                image.write(out, "member__photo");
            }
            html::element(out, "h3", "member__name", &member.name);
            html::element(out, "p", "member__role", &member.role);
            html::element(out, "p", "member__bio", &member.bio);
            if !member.social.is_empty() {
                html::open(out, "ul", "member__social", &[]);
                for link in &member.social {
                    html::open(out, "li", "", &[]);
                    let class = format!("social social--{}", link.platform);
                    html::link(out, &link.url, &class, &link.platform);
                    html::close(out, "li");
                }
                html::close(out, "ul");
            }
            html::close(out, "article");
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
    fn test_member_with_social_links() {
        let html = render(
            SectionKind::Team,
            json!({"members": [{
                "name": "Ada",
                "role": "CTO",
                "social": [{"platform": "github", "url": "https://github.com/ada"}, {"platform": "x"}]
            }]}),
        )
        .unwrap();
        assert!(html.contains("Ada"));
        assert!(html.contains("CTO"));
        assert!(html.contains(r#"href="https://github.com/ada""#));
        assert_eq!(html.matches("class=\"social ").count(), 1);
        assert!(html.contains("columns-3"));
    }

    #[test]
    fn test_lint_reports_nested_drops() {
        let warnings = lint(
            SectionKind::Team,
            json!({"members": [{"role": "x"}, {"name": "Bo", "social": [{"platform": "x"}]}]}),
        );
        assert_eq!(
            warnings,
            vec![
                "members[0] dropped: missing name".to_owned(),
                "members[1].social[0] dropped: missing url".to_owned(),
            ]
        );
    }

    #[test]
    fn test_nameless_members_render_nothing() {
        assert_eq!(
            render(SectionKind::Team, json!({"members": [{"role": "x"}]})),
            None
        );
    }
}
