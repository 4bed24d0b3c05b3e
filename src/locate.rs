//! Structural content locator.
//!
//! Finds the most likely main-content container in a page. The same
//! policy runs in two modes: string mode over raw HTML (first regex match
//! in fixed priority order) and DOM mode over a parsed document (ordered
//! selector probes with a visible-text threshold). Both consume the shared
//! rule tables so the heuristics cannot drift between paths.

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{ARTICLE_BLOCK, BODY_BLOCK, CONTENT_CLASS_BLOCK, MAIN_BLOCK};
use crate::rules::{CONTENT_SELECTORS, PARAGRAPH_FALLBACK_SELECTOR};

/// Locate the main content fragment in raw page HTML.
///
/// Priority order: first `<article>` block, first container with a
/// content-hinting class, first `<main>` block, then the `<body>`
/// contents. Each probe takes the first match in the page, not the
/// longest or most text-dense one. Returns `None` only when nothing
/// matched at all; callers treat that as a valid empty extraction, not
/// an error.
#[must_use]
pub fn locate_fragment(html: &str) -> Option<String> {
    for pattern in [&*ARTICLE_BLOCK, &*CONTENT_CLASS_BLOCK, &*MAIN_BLOCK] {
        if let Some(body) = pattern.captures(html).and_then(|c| c.get(1)) {
            if !body.as_str().is_empty() {
                return Some(body.as_str().to_string());
            }
        }
    }

    BODY_BLOCK
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Locate the main content container in a parsed document.
///
/// Probes the ordered selector list, taking the first (document-order)
/// match whose text is long enough to be an article body rather than a
/// stray match on chrome.
#[must_use]
pub fn locate_in_dom<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    for selector in CONTENT_SELECTORS {
        let sel = dom::select_first(doc, selector);
        if sel.exists()
            && dom::text_content(&sel).chars().count() > options.min_container_text_len
        {
            return Some(sel);
        }
    }
    None
}

/// Paragraph-aggregation fallback for documents where no container
/// selector matched: collect individual paragraphs of substance from
/// article/main/content-class scopes into one synthetic fragment.
///
/// Returns an empty string when no paragraph qualifies.
#[must_use]
pub fn collect_paragraphs(doc: &Document, options: &Options) -> String {
    let mut fragment = String::new();

    for node in doc.select(PARAGRAPH_FALLBACK_SELECTOR).nodes() {
        let p = Selection::from(*node);
        if dom::text_content(&p).trim().chars().count() > options.min_paragraph_len {
            fragment.push_str(&dom::outer_html(&p));
        }
    }

    fragment
}
