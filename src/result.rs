//! Output types for extraction and transcript resolution.
//!
//! These are the payloads handed back to the calling layer (server routes,
//! extension relay). Field names serialize in camelCase to match the wire
//! contract those callers expose.

use serde::{Deserialize, Serialize};

/// Result of server-side article extraction for a fetched page.
///
/// `content` is the paragraph-marked readable form (`##` headings, `•`
/// list items, `>` quotes, `**`/`*` emphasis). An empty `content` is a
/// valid-but-unhelpful result, not a failure: callers should offer a
/// "read original" fallback instead of treating it as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContent {
    /// Page title.
    pub title: String,

    /// Author name, if declared in page metadata.
    pub author: String,

    /// Page description (og:description or meta description).
    pub description: String,

    /// Readable content body.
    pub content: String,

    /// Absolute image URLs found in the content, deduplicated, capped.
    pub images: Vec<String>,

    /// The page-level main image (og:image), empty if none declared.
    pub main_image: String,
}

/// Result of in-page (live DOM) content capture.
///
/// Mirrors what the browser clipper hands to the save endpoint:
/// `full_content` keeps semantic HTML rather than the paragraph-marked
/// plain form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCapture {
    /// Page title (og:title, then title meta, then `<title>`).
    pub title: String,

    /// Author name from page metadata.
    pub author: String,

    /// Short excerpt from page metadata.
    pub excerpt: String,

    /// Page-level main image URL from metadata.
    pub image: String,

    /// Cleaned semantic-HTML content body.
    pub full_content: String,

    /// Absolute image URLs referenced by the content body.
    pub content_images: Vec<String>,
}

/// One timed unit of caption text from a video caption track.
///
/// Segments are emitted in the source caption order; `start` and
/// `duration` are seconds. Non-overlap is a source assumption, not
/// enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Decoded caption text.
    pub text: String,

    /// Segment start time in seconds.
    pub start: f64,

    /// Segment duration in seconds.
    pub duration: f64,
}

/// Result of video transcript resolution.
///
/// `has_transcript: false` with empty `transcript`/`segments` is the
/// degraded-success shape produced when caption data is unavailable;
/// it is never surfaced as a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTranscript {
    /// Extracted video identifier.
    pub video_id: String,

    /// Video title from oEmbed metadata.
    pub title: String,

    /// Channel/author name from oEmbed metadata.
    pub author: String,

    /// Thumbnail URL derived from the video identifier.
    pub thumbnail: String,

    /// Paragraph-grouped transcript as `<p>`-wrapped blocks.
    pub transcript: String,

    /// Flat ordered list of timed segments.
    pub segments: Vec<TranscriptSegment>,

    /// Whether any transcript text was recovered.
    pub has_transcript: bool,
}
