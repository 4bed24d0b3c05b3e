//! In-page content capture.
//!
//! The live-DOM equivalent of the server fetch path: given the page the
//! clipper is sitting on, read metadata, locate the main content
//! container with the shared selector probes, and keep the cleaned
//! semantic HTML rather than the plain readable form. Runs synchronously
//! over a parsed document; the clipper UI waits on its result.

use crate::dom;
use crate::locate;
use crate::metadata;
use crate::options::Options;
use crate::result::PageCapture;
use crate::transcode;
use crate::url_utils;

/// Words-per-minute assumed when estimating reading time.
const READING_WPM: usize = 200;

/// Capture readable content and metadata from a page document.
///
/// `page_url` is the address of the page itself, used to absolutize
/// relative references. An empty `full_content` means no container or
/// paragraph passed the thresholds; the capture still carries whatever
/// metadata the page declared.
#[must_use]
pub fn capture_page(html: &str, page_url: &str, options: &Options) -> PageCapture {
    let doc = dom::parse(html);
    let base = url_utils::parse_base(page_url);

    let title = metadata::lookup(&doc, "og:title")
        .or_else(|| metadata::lookup(&doc, "title"))
        .unwrap_or_else(|| dom::text_content(&dom::select_first(&doc, "title")).trim().to_string());
    let author = metadata::lookup(&doc, "author")
        .or_else(|| metadata::lookup(&doc, "article:author"))
        .unwrap_or_default();
    let excerpt = metadata::lookup(&doc, "description")
        .or_else(|| metadata::lookup(&doc, "og:description"))
        .unwrap_or_default();
    let image = metadata::lookup(&doc, "og:image")
        .or_else(|| metadata::lookup(&doc, "twitter:image"))
        .unwrap_or_default();

    let cleaned = match locate::locate_in_dom(&doc, options) {
        Some(container) => transcode::clean_preserving(&dom::outer_html(&container), base.as_ref()),
        None => {
            let synthetic = locate::collect_paragraphs(&doc, options);
            if synthetic.is_empty() {
                transcode::CleanedFragment::default()
            } else {
                transcode::clean_preserving(&synthetic, base.as_ref())
            }
        }
    };

    PageCapture {
        title,
        author,
        excerpt,
        image,
        full_content: cleaned.html,
        content_images: cleaned.images,
    }
}

/// Count the words in extracted markup, tags excluded.
#[must_use]
pub fn word_count(content_html: &str) -> usize {
    crate::patterns::ANY_TAG
        .replace_all(content_html, " ")
        .split_whitespace()
        .count()
}

/// Estimated minutes to read extracted markup, never less than one.
#[must_use]
pub fn reading_time_minutes(content_html: &str) -> usize {
    word_count(content_html).div_ceil(READING_WPM).max(1)
}
