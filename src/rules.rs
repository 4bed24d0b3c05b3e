//! Shared heuristic rule tables.
//!
//! The same structural heuristics run in two contexts: server-side over a
//! raw HTML string and client-side over a live DOM. Both adapters consume
//! the tables below (the string adapter via the compiled forms in
//! `crate::patterns`), so the two paths cannot drift apart.

/// Tags removed wholesale by the sanitizer. Whole-element spans, open tag
/// through matching close tag.
pub const STRIP_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "form", "iframe", "noscript",
];

/// Ordered CSS selector probes for locating the main content container in
/// a parsed document. Generic shapes first, then platform-specific ones
/// (Substack, Medium, LinkedIn).
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='article']",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".post-body",
    ".article-body",
    "main article",
    ".prose",
    ".markdown-body",
    ".post-content-final",
    ".body.markup",
    ".available-content",
    "article section",
    ".pw-post-body-paragraph",
    ".feed-shared-update-v2__description",
    ".share-native-main-content",
];

/// Paragraph probe used when no container selector matches: individual
/// `<p>` elements under article/main/content-class containers.
pub const PARAGRAPH_FALLBACK_SELECTOR: &str =
    "article p, main p, .post-content p, .entry-content p";

/// Elements deleted from a located content container before it is kept:
/// comment sections, sidebars, ad/promo markers, subscription prompts,
/// share widgets, interactive chrome.
pub const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    ".comments",
    ".related",
    ".sidebar",
    ".ad",
    ".advertisement",
    ".social-share",
    ".author-bio",
    "button",
    "form",
    ".subscription",
    ".paywall",
    "svg",
    "iframe",
    ".share",
    ".newsletter",
    "[data-ad]",
    ".promoted",
];

/// The only (tag, attribute) pairs that survive the HTML-preserving
/// transform. Everything else is stripped.
pub const KEPT_ATTRIBUTES: &[(&str, &str)] = &[("a", "href"), ("img", "src"), ("img", "alt")];

/// Image source substrings that mark tracking/placeholder images.
pub const REJECTED_IMAGE_MARKERS: &[&str] = &["data:", "pixel", "tracking"];

/// Returns true when a kept element may retain the given attribute.
#[must_use]
pub fn is_kept_attribute(tag: &str, attr: &str) -> bool {
    KEPT_ATTRIBUTES
        .iter()
        .any(|(t, a)| *t == tag && *a == attr)
}

/// Returns true when an image source looks like a tracking or placeholder
/// image rather than content.
#[must_use]
pub fn is_rejected_image_src(src: &str) -> bool {
    REJECTED_IMAGE_MARKERS
        .iter()
        .any(|marker| src.contains(marker))
}
