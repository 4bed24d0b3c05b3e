//! Readable-form transcoder.
//!
//! Converts a located content fragment into the canonical readable
//! representation. Two flavors exist for the two call sites:
//!
//! - [`clean_preserving`] keeps semantic HTML (used by live-DOM capture),
//!   working over a real parsed tree so element boundaries and attributes
//!   are handled exactly.
//! - [`to_plain_markup`] produces the paragraph-marked plain form (used by
//!   the server fetch path) via ordered textual substitutions.
//!
//! Both flavors share the noise-selector and attribute rule tables in
//! `crate::rules`.

use url::Url;

use crate::dom::{self, Selection};
use crate::entities;
use crate::patterns::{
    ANCHOR_WITH_HREF, ANY_TAG, BLOCKQUOTE, BOLD_SPAN, EMPTY_CONTAINER, HEADING_RULES,
    HORIZONTAL_WHITESPACE, INTER_TAG_WHITESPACE, ITALIC_SPAN, LINE_BREAK, LIST_ITEM,
    MULTIPLE_BLANK_LINES, PARAGRAPH_TAG, WHITESPACE_RUN,
};
use crate::rules::{self, NOISE_SELECTORS};
use crate::url_utils;

/// A content fragment after HTML-preserving cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedFragment {
    /// Cleaned semantic HTML.
    pub html: String,

    /// Absolute image URLs found while cleaning, first-seen order.
    pub images: Vec<String>,
}

/// Clean a content fragment while preserving its semantic HTML.
///
/// Deletes noise elements, strips every attribute not on the allow-list
/// (`href` on anchors is absolutized against `base` when root-relative),
/// normalizes image sources (including `data-src`/`data-lazy-src` lazy
/// variants), promotes text-bearing leaf `div`/`span` nodes to `<p>`, and
/// drops empty containers and redundant inter-tag whitespace.
#[must_use]
pub fn clean_preserving(fragment: &str, base: Option<&Url>) -> CleanedFragment {
    let doc = dom::parse_fragment(fragment);
    let root = dom::fragment_root(&doc);

    for selector in NOISE_SELECTORS {
        root.select(selector).remove();
    }

    let mut images = Vec::new();
    for node in root.select("img").nodes() {
        let img = Selection::from(*node);
        let src = dom::get_attribute(&img, "src")
            .or_else(|| dom::get_attribute(&img, "data-src"))
            .or_else(|| dom::get_attribute(&img, "data-lazy-src"));
        let Some(src) = src else { continue };

        let resolved = match base {
            Some(base) => url_utils::create_absolute_url(&src, base),
            None => src,
        };

        if resolved.starts_with("http") && !rules::is_rejected_image_src(&resolved) {
            if !images.contains(&resolved) {
                images.push(resolved.clone());
            }
            dom::set_attribute(&img, "src", &resolved);
            dom::remove_attribute(&img, "srcset");
            dom::remove_attribute(&img, "data-src");
            dom::remove_attribute(&img, "loading");
        }
    }

    for node in root.select("*").nodes() {
        let el = Selection::from(*node);
        let Some(tag) = dom::tag_name(&el) else { continue };

        for (name, value) in dom::get_all_attributes(&el) {
            if rules::is_kept_attribute(&tag, &name) {
                if tag == "a" && name == "href" && value.starts_with('/') {
                    if let Some(base) = base {
                        dom::set_attribute(&el, "href", &url_utils::create_absolute_url(&value, base));
                    }
                }
                continue;
            }
            dom::remove_attribute(&el, &name);
        }

        if (tag == "div" || tag == "span") && el.select("*").length() == 0 {
            let text = dom::text_content(&el);
            let text = text.trim();
            if !text.is_empty() {
                dom::replace_with_html(&el, &format!("<p>{}</p>", entities::encode_text(text)));
            }
        }
    }

    let html = dom::inner_html(&root);
    let html = EMPTY_CONTAINER.replace_all(&html, "");
    let html = WHITESPACE_RUN.replace_all(&html, " ");
    let html = INTER_TAG_WHITESPACE.replace_all(&html, "><");

    CleanedFragment {
        html: html.trim().to_string(),
        images,
    }
}

/// Convert sanitized HTML into the paragraph-marked plain form.
///
/// Heading levels become `##`–`#####` marker lines, paragraphs become
/// blank-line-delimited text, list items become `•` lines, blockquotes
/// become `>` lines, bold/italic become `**`/`*` spans, and anchors keep
/// only their text. Remaining tags are stripped, entities decoded, and
/// whitespace normalized (3+ newlines to 2, horizontal runs to one
/// space).
///
/// Idempotent: running the transform on its own output changes nothing.
#[must_use]
pub fn to_plain_markup(html: &str) -> String {
    let mut out = html.to_string();

    for (pattern, marker) in HEADING_RULES.iter() {
        out = pattern.replace_all(&out, *marker).into_owned();
    }
    out = PARAGRAPH_TAG.replace_all(&out, "\n${1}\n").into_owned();
    out = LINE_BREAK.replace_all(&out, "\n").into_owned();
    out = LIST_ITEM.replace_all(&out, "\n\u{2022} ${1}").into_owned();
    out = BLOCKQUOTE.replace_all(&out, "\n> ${1}\n").into_owned();
    out = BOLD_SPAN.replace_all(&out, "**${1}**").into_owned();
    out = ITALIC_SPAN.replace_all(&out, "*${1}*").into_owned();
    out = ANCHOR_WITH_HREF.replace_all(&out, "${1}").into_owned();
    out = ANY_TAG.replace_all(&out, "").into_owned();

    out = entities::decode(&out);

    out = MULTIPLE_BLANK_LINES.replace_all(&out, "\n\n").into_owned();
    out = HORIZONTAL_WHITESPACE.replace_all(&out, " ").into_owned();

    out.trim().to_string()
}
