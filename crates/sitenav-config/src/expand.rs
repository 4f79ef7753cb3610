//! Environment variable expansion for declaration strings.
//!
//! Supports `${VAR}` (error if unset) and `${VAR:-default}`. Bare `$VAR` is
//! left alone so paths and URLs containing `$` pass through unchanged.

use crate::declaration::{NavItemDeclaration, SiteDeclaration};
use crate::error::ConfigError;

/// Expand `title`, `description` and every link in place.
pub(crate) fn expand_declaration(decl: &mut SiteDeclaration) -> Result<(), ConfigError> {
    expand_opt(&mut decl.title, "title")?;
    expand_opt(&mut decl.description, "description")?;

    for (i, item) in decl.nav.iter_mut().enumerate() {
        expand_item(item, &format!("nav[{i}]"))?;
    }
    for (i, group) in decl.sidebar.iter_mut().enumerate() {
        for (j, item) in group.items.iter_mut().flatten().enumerate() {
            expand_item(item, &format!("sidebar[{i}].items[{j}]"))?;
        }
    }
    for (i, social) in decl.social_links.iter_mut().enumerate() {
        expand_opt(&mut social.link, &format!("socialLinks[{i}].link"))?;
    }
    Ok(())
}

fn expand_item(item: &mut NavItemDeclaration, at: &str) -> Result<(), ConfigError> {
    expand_opt(&mut item.link, &format!("{at}.link"))
}

fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_mut() {
        *v = expand_env(v, field)?;
    }
    Ok(())
}

/// Expand environment variable references in a single string.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    shellexpand::env_with_context(&escaped, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

/// Double every `$` that does not open `${`, so shellexpand leaves it literal.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        escaped.push(c);
        if c == '$' && chars.peek() != Some(&'{') {
            escaped.push('$');
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{SidebarGroupDeclaration, SocialLinkDeclaration};

    #[test]
    fn test_expand_with_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_UNSET_ORG");
        }
        let result = expand_env(
            "https://github.com/${SITENAV_UNSET_ORG:-sera-js}/sera",
            "socialLinks[0].link",
        )
        .unwrap();
        assert_eq!(result, "https://github.com/sera-js/sera");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_MISSING_URL");
        }
        let err = expand_env("${SITENAV_MISSING_URL}", "nav[3].link").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SITENAV_MISSING_URL"));
        assert!(err.to_string().contains("nav[3].link"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("/api/$ref", "nav[0].link").unwrap();
        assert_eq!(result, "/api/$ref");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_TEST_API_VER", "2");
        }
        let result = expand_env("/api/$ref/${SITENAV_TEST_API_VER}", "nav[0].link").unwrap();
        assert_eq!(result, "/api/$ref/2");
        unsafe {
            std::env::remove_var("SITENAV_TEST_API_VER");
        }
    }

    #[test]
    fn test_trailing_and_doubled_dollars_kept() {
        let result = expand_env("/pay/$$/${SITENAV_UNSET_CUR:-usd}/$", "nav[0].link").unwrap();
        assert_eq!(result, "/pay/$$/usd/$");
    }

    #[test]
    fn test_escape_bare_dollars() {
        assert_eq!(escape_bare_dollars("$a${B}$"), "$$a${B}$$");
        assert_eq!(escape_bare_dollars("no dollars"), "no dollars");
    }

    #[test]
    fn test_expand_declaration_walks_all_links() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_TEST_REPO", "https://github.com/sera-js/sera");
            std::env::set_var("SITENAV_TEST_VERSION", "2.1");
        }

        let mut decl = SiteDeclaration {
            title: Some("SeraJS ${SITENAV_TEST_VERSION}".to_owned()),
            description: None,
            nav: vec![NavItemDeclaration::new("Source", "${SITENAV_TEST_REPO}")],
            sidebar: vec![SidebarGroupDeclaration::new(
                "Releases",
                vec![NavItemDeclaration::new(
                    "Notes",
                    "/releases/${SITENAV_TEST_VERSION}",
                )],
            )],
            social_links: vec![SocialLinkDeclaration::new("github", "${SITENAV_TEST_REPO}")],
        };
        expand_declaration(&mut decl).unwrap();

        assert_eq!(decl.title.as_deref(), Some("SeraJS 2.1"));
        assert_eq!(
            decl.nav[0].link.as_deref(),
            Some("https://github.com/sera-js/sera")
        );
        assert_eq!(
            decl.sidebar[0].items.as_ref().unwrap()[0].link.as_deref(),
            Some("/releases/2.1")
        );
        assert_eq!(
            decl.social_links[0].link.as_deref(),
            Some("https://github.com/sera-js/sera")
        );

        unsafe {
            std::env::remove_var("SITENAV_TEST_REPO");
            std::env::remove_var("SITENAV_TEST_VERSION");
        }
    }

    #[test]
    fn test_expand_declaration_reports_sidebar_position() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_MISSING_PAGE");
        }
        let mut decl = SiteDeclaration {
            sidebar: vec![
                SidebarGroupDeclaration::new("A", vec![NavItemDeclaration::new("x", "/x")]),
                SidebarGroupDeclaration::new(
                    "B",
                    vec![
                        NavItemDeclaration::new("y", "/y"),
                        NavItemDeclaration::new("z", "${SITENAV_MISSING_PAGE}"),
                    ],
                ),
            ],
            ..SiteDeclaration::default()
        };
        let err = expand_declaration(&mut decl).unwrap_err();
        assert!(err.to_string().contains("sidebar[1].items[1].link"));
    }
}
