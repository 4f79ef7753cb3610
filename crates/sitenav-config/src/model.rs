//! Validated navigation model.
//!
//! Values of these types only come out of [`build`] and expose read-only
//! accessors, so a [`SiteConfig`] cannot change after validation.

use std::collections::HashSet;

use serde::Serialize;

use crate::declaration::{
    NavItemDeclaration, SidebarGroupDeclaration, SiteDeclaration, SocialLinkDeclaration,
};
use crate::error::{BuildError, UnknownIconError, ValidationError};
use crate::icons::IconSet;
use crate::link::{require_https_url, require_nav_link, require_non_empty};

/// A single labeled link in the top navigation or a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    text: String,
    link: String,
}

impl NavItem {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link target: a path starting with `/` or an `https://` URL.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Whether the link points outside the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        !self.link.starts_with('/')
    }
}

/// A named, ordered cluster of links shown together in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Group heading.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Links in display order. Never empty.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Collapse hint for the renderer.
    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }
}

/// An icon-labeled external link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    icon: String,
    link: String,
}

impl SocialLink {
    /// Icon identifier from the renderer's icon set.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Absolute `https://` URL.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Validated navigation data for a documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    description: String,
    nav: Vec<NavItem>,
    sidebar: Vec<SidebarGroup>,
    social_links: Vec<SocialLink>,
}

impl SiteConfig {
    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description (may be empty).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Top navigation entries in declaration order.
    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar groups in declaration order.
    #[must_use]
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    /// Social links in declaration order.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Total number of links across nav, sidebar and social links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.nav.len()
            + self.sidebar.iter().map(|g| g.items.len()).sum::<usize>()
            + self.social_links.len()
    }

    /// Convert back into the literal form accepted by [`build`].
    #[must_use]
    pub fn to_declaration(&self) -> SiteDeclaration {
        let item = |i: &NavItem| NavItemDeclaration::new(i.text.clone(), i.link.clone());
        SiteDeclaration {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            nav: self.nav.iter().map(item).collect(),
            sidebar: self
                .sidebar
                .iter()
                .map(|g| SidebarGroupDeclaration {
                    text: Some(g.text.clone()),
                    collapsed: g.collapsed,
                    items: Some(g.items.iter().map(item).collect()),
                })
                .collect(),
            social_links: self
                .social_links
                .iter()
                .map(|s| SocialLinkDeclaration::new(s.icon.clone(), s.link.clone()))
                .collect(),
        }
    }
}

/// Validate a declaration against the default [`IconSet`].
pub fn build(declaration: &SiteDeclaration) -> Result<SiteConfig, BuildError> {
    build_with_icons(declaration, &IconSet::default())
}

/// Validate a declaration and produce an immutable [`SiteConfig`].
///
/// Sequence order is preserved exactly. The first failing entry is reported
/// by its field path, e.g. `sidebar[1].items[0].link`.
pub fn build_with_icons(
    declaration: &SiteDeclaration,
    icons: &IconSet,
) -> Result<SiteConfig, BuildError> {
    let title = required(declaration.title.as_deref(), "title")?;
    let description = declaration.description.clone().unwrap_or_default();

    let nav = declaration
        .nav
        .iter()
        .enumerate()
        .map(|(i, item)| build_nav_item(item, &format!("nav[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let sidebar = declaration
        .sidebar
        .iter()
        .enumerate()
        .map(|(i, group)| build_group(group, &format!("sidebar[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let social_links = declaration
        .social_links
        .iter()
        .enumerate()
        .map(|(i, social)| build_social_link(social, &format!("socialLinks[{i}]"), icons))
        .collect::<Result<Vec<_>, BuildError>>()?;

    warn_duplicate_links(&sidebar);

    Ok(SiteConfig {
        title,
        description,
        nav,
        sidebar,
        social_links,
    })
}

fn required(value: Option<&str>, field: &str) -> Result<String, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(field, "is required"))?;
    require_non_empty(value, field)?;
    Ok(value.to_owned())
}

fn build_nav_item(item: &NavItemDeclaration, at: &str) -> Result<NavItem, ValidationError> {
    let text = required(item.text.as_deref(), &format!("{at}.text"))?;
    let link_field = format!("{at}.link");
    let link = required(item.link.as_deref(), &link_field)?;
    require_nav_link(&link, &link_field)?;
    Ok(NavItem { text, link })
}

fn build_group(group: &SidebarGroupDeclaration, at: &str) -> Result<SidebarGroup, ValidationError> {
    let text = required(group.text.as_deref(), &format!("{at}.text"))?;
    let items_field = format!("{at}.items");
    let declared = group
        .items
        .as_deref()
        .ok_or_else(|| ValidationError::new(&items_field, "is required"))?;
    if declared.is_empty() {
        return Err(ValidationError::new(items_field, "must contain at least one item"));
    }
    let items = declared
        .iter()
        .enumerate()
        .map(|(i, item)| build_nav_item(item, &format!("{items_field}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SidebarGroup {
        text,
        collapsed: group.collapsed,
        items,
    })
}

fn build_social_link(
    social: &SocialLinkDeclaration,
    at: &str,
    icons: &IconSet,
) -> Result<SocialLink, BuildError> {
    let icon_field = format!("{at}.icon");
    let icon = required(social.icon.as_deref(), &icon_field)?;
    if !icons.contains(&icon) {
        return Err(UnknownIconError {
            field: icon_field,
            icon,
        }
        .into());
    }
    let link_field = format!("{at}.link");
    let link = required(social.link.as_deref(), &link_field)?;
    require_https_url(&link, &link_field)?;
    Ok(SocialLink { icon, link })
}

/// Repeated sidebar links are legal but usually a copy-paste mistake.
fn warn_duplicate_links(sidebar: &[SidebarGroup]) {
    for (group, link) in duplicate_links(sidebar) {
        tracing::warn!(
            link = %link,
            group = %group,
            "Link appears more than once in the sidebar"
        );
    }
}

/// Sidebar links already seen in an earlier position, as `(group, link)`.
fn duplicate_links(sidebar: &[SidebarGroup]) -> Vec<(&str, &str)> {
    let mut seen = HashSet::new();
    sidebar
        .iter()
        .flat_map(|group| group.items.iter().map(move |item| (group, item)))
        .filter(|(_, item)| !seen.insert(item.link.as_str()))
        .map(|(group, item)| (group.text.as_str(), item.link.as_str()))
        .collect()
}
