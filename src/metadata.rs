//! Page metadata extraction.
//!
//! Reads title, author, description, and main-image hints from document
//! metadata (`<title>`, standard meta tags, Open Graph, Twitter cards).
//! Works on the parsed document so it sees metadata regardless of where
//! the content heuristics land.

use crate::dom::{self, Document};

/// Metadata pulled from a page's head.
///
/// Fields are empty strings when the page declares nothing; extraction
/// never fails on missing metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title from `<title>`.
    pub title: String,

    /// Author from `meta[name=author]`, then `article:author`.
    pub author: String,

    /// Description from `og:description`, then `meta[name=description]`.
    pub description: String,

    /// Main image from `og:image`.
    pub main_image: String,
}

/// Extract server-path metadata from a parsed page.
#[must_use]
pub fn extract(doc: &Document) -> PageMeta {
    PageMeta {
        title: dom::text_content(&dom::select_first(doc, "title")).trim().to_string(),
        author: meta_content(doc, "meta[name='author']")
            .or_else(|| meta_content(doc, "meta[property='article:author']"))
            .unwrap_or_default(),
        description: meta_content(doc, "meta[property='og:description']")
            .or_else(|| meta_content(doc, "meta[name='description']"))
            .unwrap_or_default(),
        main_image: meta_content(doc, "meta[property='og:image']").unwrap_or_default(),
    }
}

/// Look up a named meta value the way the in-page clipper does: probe
/// `property=name`, `name=name`, `property=og:name`, and
/// `name=twitter:name` in that order and take the first non-empty content.
#[must_use]
pub fn lookup(doc: &Document, name: &str) -> Option<String> {
    let selectors = [
        format!("meta[property='{name}']"),
        format!("meta[name='{name}']"),
        format!("meta[property='og:{name}']"),
        format!("meta[name='twitter:{name}']"),
    ];

    selectors
        .iter()
        .find_map(|selector| meta_content(doc, selector))
}

fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let content = dom::get_attribute(&dom::select_first(doc, selector), "content")?;
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title> The Big Story </title>
        <meta name="author" content="Jo Writer">
        <meta property="og:description" content="A tale.">
        <meta name="description" content="fallback desc">
        <meta property="og:image" content="https://ex.com/hero.jpg">
        <meta property="og:title" content="OG Story">
        </head><body></body></html>"#;

    #[test]
    fn extracts_head_metadata() {
        let doc = dom::parse(PAGE);
        let meta = extract(&doc);

        assert_eq!(meta.title, "The Big Story");
        assert_eq!(meta.author, "Jo Writer");
        assert_eq!(meta.description, "A tale.");
        assert_eq!(meta.main_image, "https://ex.com/hero.jpg");
    }

    #[test]
    fn description_prefers_open_graph() {
        let html = r#"<head><meta name="description" content="plain"></head>"#;
        let doc = dom::parse(html);
        assert_eq!(extract(&doc).description, "plain");

        let doc = dom::parse(PAGE);
        assert_eq!(extract(&doc).description, "A tale.");
    }

    #[test]
    fn missing_metadata_yields_empty_fields() {
        let doc = dom::parse("<html><body><p>bare</p></body></html>");
        let meta = extract(&doc);

        assert!(meta.title.is_empty());
        assert!(meta.author.is_empty());
        assert!(meta.description.is_empty());
        assert!(meta.main_image.is_empty());
    }

    #[test]
    fn lookup_probes_all_name_forms() {
        let doc = dom::parse(PAGE);

        assert_eq!(lookup(&doc, "og:title"), Some("OG Story".to_string()));
        // bare name found via the og: expansion
        assert_eq!(lookup(&doc, "title"), Some("OG Story".to_string()));
        assert_eq!(lookup(&doc, "author"), Some("Jo Writer".to_string()));
        assert_eq!(lookup(&doc, "nonexistent"), None);
    }
}
