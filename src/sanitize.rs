//! Markup sanitizer.
//!
//! Strips non-content elements from a raw HTML fragment before it is
//! transcoded into readable form. Operates purely on the string: element
//! spans are matched case-insensitively and non-greedily from open tag to
//! the first matching close tag.
//!
//! Known limitation: this is best-effort pattern matching, not parsing.
//! Unclosed tags keep their content, and nested same-name elements
//! truncate the removal at the innermost closer. The DOM-based capture
//! path handles those shapes exactly; this path accepts the tradeoff for
//! string-only inputs.

use crate::patterns::{HTML_COMMENT, STRIP_ELEMENTS};

/// Remove script/style/nav/header/footer/aside/form/iframe/noscript
/// elements and HTML comments from `fragment`.
///
/// Idempotent: sanitizing already-sanitized markup returns it unchanged.
#[must_use]
pub fn sanitize(fragment: &str) -> String {
    let mut out = fragment.to_string();

    for pattern in STRIP_ELEMENTS.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }

    HTML_COMMENT.replace_all(&out, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_whole_elements() {
        let html = "<p>keep</p><script>var x = 1;</script><style>p{}</style><p>also</p>";
        let out = sanitize(html);
        assert_eq!(out, "<p>keep</p><p>also</p>");
    }

    #[test]
    fn removes_chrome_elements() {
        let html = "<header><h1>Site</h1></header><article><p>body</p></article><footer>©</footer>";
        let out = sanitize(html);
        assert_eq!(out, "<article><p>body</p></article>");
    }

    #[test]
    fn removes_multiline_and_mixed_case() {
        let html = "<NAV>\n<a href='/'>home</a>\n</NAV><p>x</p><IFRAME src='a'>\n</IFRAME>";
        let out = sanitize(html);
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn removes_comments() {
        let html = "<p>a</p><!-- hidden\nnote --><p>b</p>";
        assert_eq!(sanitize(html), "<p>a</p><p>b</p>");
    }

    #[test]
    fn removes_forms_and_asides() {
        let html = "<aside>related</aside><form><input></form><p>text</p><noscript>js off</noscript>";
        assert_eq!(sanitize(html), "<p>text</p>");
    }

    #[test]
    fn is_idempotent() {
        let html = "<div><script>a</script><p>one</p><!--c--><nav>n</nav><p>two</p></div>";
        let once = sanitize(html);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn unclosed_tags_are_left_alone() {
        // Best-effort contract: no matching closer, no removal.
        let html = "<p>before</p><script>var x = 1;";
        assert_eq!(sanitize(html), html);
    }
}
