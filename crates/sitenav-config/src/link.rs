//! Link target checks.
//!
//! Navigation links are either site-relative paths (`/guide`) or absolute
//! `https://` URLs. Social links must be absolute URLs.

use url::Url;

use crate::error::ValidationError;

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Require a navigation link: a path starting with `/` or an `https://` URL.
pub(crate) fn require_nav_link(link: &str, field: &str) -> Result<(), ValidationError> {
    require_non_empty(link, field)?;
    if link.starts_with('/') && !link.starts_with("//") {
        return require_clean(link, field);
    }
    if link.contains("://") {
        return require_https_url(link, field);
    }
    Err(ValidationError::new(
        field,
        format!("\"{link}\" must start with / or https://"),
    ))
}

/// Require an absolute `https://` URL with a host.
///
/// The string is checked as written: `Url::parse` would otherwise accept
/// `https:host` and silently trim or drop whitespace.
pub(crate) fn require_https_url(link: &str, field: &str) -> Result<(), ValidationError> {
    require_non_empty(link, field)?;
    require_clean(link, field)?;
    if !link.starts_with("https://") {
        return Err(ValidationError::new(
            field,
            format!("\"{link}\" must use https://"),
        ));
    }
    let url = Url::parse(link)
        .map_err(|e| ValidationError::new(field, format!("\"{link}\" is not a valid URL: {e}")))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::new(
            field,
            format!("\"{link}\" has no host"),
        ));
    }
    Ok(())
}

fn require_clean(link: &str, field: &str) -> Result<(), ValidationError> {
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::new(
            field,
            format!("\"{link}\" contains whitespace or control characters"),
        ));
    }
    Ok(())
}
