//! Server-side article extraction.
//!
//! The fetch path used when no live DOM is available: retrieve the page
//! over HTTP, transcode the bytes to UTF-8, locate the main content as a
//! string fragment, sanitize it, and produce the paragraph-marked
//! readable form plus the page's images and metadata.

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::http;
use crate::images;
use crate::locate;
use crate::metadata;
use crate::options::Options;
use crate::result::ArticleContent;
use crate::sanitize;
use crate::transcode;

/// Extract readable article content from already-fetched page HTML.
///
/// Pure string/DOM work, no network. An empty `content` in the result is
/// a valid-but-unhelpful extraction (nothing matched the heuristics), not
/// a failure.
#[must_use]
pub fn extract_article(html: &str, url: &str, options: &Options) -> ArticleContent {
    let doc = dom::parse(html);
    let meta = metadata::extract(&doc);

    let fragment = locate::locate_fragment(html).unwrap_or_default();
    let fragment = sanitize::sanitize(&fragment);

    let main_image = if meta.main_image.is_empty() {
        None
    } else {
        Some(meta.main_image.as_str())
    };
    let images = images::collect(&fragment, url, main_image, options);

    let content = transcode::to_plain_markup(&fragment);
    if content.is_empty() {
        tracing::debug!(url, "no content container matched, returning empty extraction");
    }

    ArticleContent {
        title: meta.title,
        author: meta.author,
        description: meta.description,
        content,
        images,
        main_image: meta.main_image,
    }
}

/// Fetch a page and extract readable article content from it.
///
/// Fails with [`Error::UpstreamFetch`] on network errors or a non-success
/// status; extraction itself never fails (see [`extract_article`]).
pub async fn fetch_article(url: &str, options: &Options) -> Result<ArticleContent> {
    let client = http::client(options)?;

    tracing::debug!(url, "fetching article page");
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, http::CLIPPER_USER_AGENT)
        .header(reqwest::header::ACCEPT, http::HTML_ACCEPT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::UpstreamFetch(format!(
            "fetching {url} returned status {status}"
        )));
    }

    let bytes = response.bytes().await?;
    let html = encoding::transcode_to_utf8(&bytes);

    Ok(extract_article(&html, url, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title>Sample Post</title>
        <meta name="author" content="A. Writer">
        <meta property="og:description" content="About things.">
        <meta property="og:image" content="https://ex.com/hero.jpg">
        </head><body>
        <nav><a href="/">home</a></nav>
        <article>
          <h1>Sample Post</h1>
          <p>First paragraph with <b>bold</b> text.</p>
          <img src="/inline.png">
          <script>track();</script>
        </article>
        </body></html>"#;

    #[test]
    fn extracts_full_payload() {
        let article = extract_article(PAGE, "https://ex.com/post", &Options::default());

        assert_eq!(article.title, "Sample Post");
        assert_eq!(article.author, "A. Writer");
        assert_eq!(article.description, "About things.");
        assert!(article.content.contains("## Sample Post"));
        assert!(article.content.contains("First paragraph with **bold** text."));
        assert!(!article.content.contains("track()"));
        assert_eq!(article.main_image, "https://ex.com/hero.jpg");
        assert_eq!(
            article.images,
            vec!["https://ex.com/hero.jpg", "https://ex.com/inline.png"]
        );
    }

    #[test]
    fn empty_page_is_a_valid_empty_extraction() {
        let article = extract_article("<html></html>", "https://ex.com/", &Options::default());

        assert!(article.content.is_empty());
        assert!(article.images.is_empty());
        assert!(article.title.is_empty());
    }

    #[test]
    fn nav_content_outside_article_is_ignored() {
        let article = extract_article(PAGE, "https://ex.com/post", &Options::default());
        assert!(!article.content.contains("home"));
    }
}
