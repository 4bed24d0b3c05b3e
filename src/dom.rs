//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate giving the extraction code a
//! small, stable vocabulary for the handful of tree operations it needs.
//! Text accessors return `StrTendril` (reference-counted, `Deref<str>`);
//! convert with `.to_string()` only when owned storage is required.

// Re-export core types for internal and external use
pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse an HTML fragment, wrapping it so the fragment's own root nodes
/// are addressable as children of a single known container.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Document {
    Document::from(format!("<div id=\"readclip-root\">{fragment}</div>"))
}

/// Select the wrapper element created by [`parse_fragment`].
#[inline]
#[must_use]
pub fn fragment_root(doc: &Document) -> Selection<'_> {
    doc.select("#readclip-root")
}

/// First element matching a CSS selector, searching the whole document.
///
/// Returns an empty selection when nothing matches; attribute and text
/// accessors on it yield `None`/empty.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select("html").select_single(selector)
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get an attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes of the first node as key-value pairs.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Remove the selected elements from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Replace the selected element with new HTML.
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}
