//! Literal site declarations as written by documentation authors.
//!
//! Every field is optional at this level so that a missing value is reported
//! by [`build`](crate::build) with the entry's position, instead of as an
//! opaque deserialization error.

use serde::{Deserialize, Serialize};

/// Unvalidated site declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDeclaration {
    /// Site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top navigation entries.
    #[serde(default)]
    pub nav: Vec<NavItemDeclaration>,
    /// Sidebar groups in display order.
    #[serde(default)]
    pub sidebar: Vec<SidebarGroupDeclaration>,
    /// Social links in display order.
    #[serde(default, alias = "social_links")]
    pub social_links: Vec<SocialLinkDeclaration>,
}

/// Unvalidated navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Unvalidated sidebar group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroupDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Renderer hint: `Some(true)` starts collapsed, `Some(false)` starts
    /// expanded, `None` is not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavItemDeclaration>>,
}

/// Unvalidated social link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl NavItemDeclaration {
    /// Shorthand for a fully populated entry.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            link: Some(link.into()),
        }
    }
}

impl SidebarGroupDeclaration {
    /// Shorthand for a group with the given items.
    pub fn new(text: impl Into<String>, items: Vec<NavItemDeclaration>) -> Self {
        Self {
            text: Some(text.into()),
            collapsed: None,
            items: Some(items),
        }
    }
}

impl SocialLinkDeclaration {
    /// Shorthand for a fully populated social link.
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            link: Some(link.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_toml_declaration() {
        let toml = r#"
title = "SeraJS"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "Introduction"
collapsed = false

[[sidebar.items]]
text = "Getting Started"
link = "/getting-started"

[[socialLinks]]
icon = "github"
link = "https://github.com/sera-js/sera"
"#;
        let decl: SiteDeclaration = toml::from_str(toml).unwrap();
        assert_eq!(
            decl,
            SiteDeclaration {
                title: Some("SeraJS".to_owned()),
                description: None,
                nav: vec![NavItemDeclaration::new("Home", "/")],
                sidebar: vec![SidebarGroupDeclaration {
                    collapsed: Some(false),
                    ..SidebarGroupDeclaration::new(
                        "Introduction",
                        vec![NavItemDeclaration::new("Getting Started", "/getting-started")],
                    )
                }],
                social_links: vec![SocialLinkDeclaration::new(
                    "github",
                    "https://github.com/sera-js/sera"
                )],
            }
        );
    }

    #[test]
    fn test_snake_case_social_links_alias() {
        let toml = r#"
[[social_links]]
icon = "discord"
link = "https://discord.gg/sera"
"#;
        let decl: SiteDeclaration = toml::from_str(toml).unwrap();
        assert_eq!(decl.social_links.len(), 1);
        assert_eq!(decl.social_links[0].icon.as_deref(), Some("discord"));
    }

    #[test]
    fn test_missing_fields_parse_as_none() {
        let decl: SiteDeclaration = serde_json::from_str(r#"{"sidebar":[{"text":"Guide"}]}"#).unwrap();
        assert!(decl.title.is_none());
        assert!(decl.sidebar[0].items.is_none());
    }

    #[test]
    fn test_parse_yaml_declaration() {
        let yaml = "
title: SeraJS
nav:
  - text: Home
    link: /
socialLinks:
  - icon: github
    link: https://github.com/sera-js/sera
";
        let decl: SiteDeclaration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(decl.nav, vec![NavItemDeclaration::new("Home", "/")]);
        assert_eq!(decl.social_links.len(), 1);
    }
}
