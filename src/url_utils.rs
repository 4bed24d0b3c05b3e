//! URL utilities.
//!
//! Resolution and validation helpers for turning the relative image and
//! link references found in page content into absolute URLs.

use url::Url;

/// Check if a string is an absolute http(s) URL.
///
/// Returns the parsed URL alongside the verdict so callers resolving many
/// references do not parse twice.
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve a possibly-relative URL against a base.
///
/// Root-relative (`/img.png`), protocol-relative (`//cdn.ex.com/img.png`),
/// and path-relative references all resolve against `base`. Absolute URLs
/// and non-network schemes (`data:`, `javascript:`, `mailto:`, `tel:`)
/// are returned unchanged, as is anything that fails to resolve.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Parse a page URL into a base for resolution. `None` when the string is
/// not an absolute http(s) URL.
#[must_use]
pub fn parse_base(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}
