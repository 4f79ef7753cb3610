//! Allow-list of social icon identifiers understood by the renderer.

use std::collections::BTreeSet;

/// Icons shipped by common documentation themes.
const DEFAULT_ICONS: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "twitter",
    "x",
    "youtube",
];

/// Set of recognized social icon identifiers.
///
/// The set belongs to the renderer's theme, so it is passed to
/// [`build_with_icons`](crate::build_with_icons) rather than hardcoded.
/// Matching is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    known: BTreeSet<String>,
}

impl IconSet {
    /// Create a set containing exactly the given identifiers.
    pub fn new<I, S>(icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: icons.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend the set with additional identifiers.
    #[must_use]
    pub fn with<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(icons.into_iter().map(Into::into));
        self
    }

    /// Check whether `icon` is recognized.
    #[must_use]
    pub fn contains(&self, icon: &str) -> bool {
        self.known.contains(icon)
    }

    /// Iterate recognized identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Number of recognized identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Extend<String> for IconSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.known.extend(iter);
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(DEFAULT_ICONS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_observed_icons() {
        let icons = IconSet::default();
        assert!(icons.contains("github"));
        assert!(icons.contains("discord"));
        assert!(!icons.contains("myspace"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!IconSet::default().contains("GitHub"));
    }

    #[test]
    fn test_new_replaces_defaults() {
        let icons = IconSet::new(["gitea"]);
        assert!(icons.contains("gitea"));
        assert!(!icons.contains("github"));
        assert_eq!(icons.len(), 1);
    }

    #[test]
    fn test_with_extends() {
        let icons = IconSet::default().with(["bluesky"]);
        assert!(icons.contains("bluesky"));
        assert!(icons.contains("github"));
        assert_eq!(icons.len(), DEFAULT_ICONS.len() + 1);
    }

    #[test]
    fn test_extend_in_place() {
        let mut icons = IconSet::new(["github"]);
        icons.extend(["matrix".to_owned()]);
        assert!(icons.contains("matrix"));
        assert_eq!(icons.len(), 2);
    }

    #[test]
    fn test_iter_sorted() {
        let icons = IconSet::new(["x", "discord", "github"]);
        let names: Vec<&str> = icons.iter().collect();
        assert_eq!(names, vec!["discord", "github", "x"]);
    }
}
