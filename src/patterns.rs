//! Compiled regex rule tables for extraction, transcoding, and transcripts.
//!
//! All patterns are compiled once at startup using `LazyLock`. They are the
//! string-mode half of the shared heuristic rule set; the selector half
//! (CSS selectors, attribute allow-list) lives in `crate::rules` so the
//! string and DOM adapters cannot drift apart.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Sanitizer Patterns
// =============================================================================

/// Whole-element removal patterns for non-content tags, one per entry in
/// `rules::STRIP_TAGS`. Case-insensitive, non-greedy, dot-matches-newline.
///
/// Known limitation: matching is best-effort over raw markup. An unclosed
/// tag leaves its span untouched, and a nested same-name tag truncates the
/// match at the first closer.
pub static STRIP_ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    crate::rules::STRIP_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}[^>]*>.*?</{tag}>")).expect("STRIP_ELEMENTS regex")
        })
        .collect()
});

/// Matches HTML comments, across lines.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

// =============================================================================
// Content Location Patterns (string mode)
// =============================================================================

/// First `<article>` block in the page.
pub static ARTICLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<article[^>]*>(.*?)</article>").expect("ARTICLE_BLOCK regex"));

/// First container whose class carries a content hint
/// (`post-content`, `article-content`, `entry-content`, `content-body`,
/// `prose`).
pub static CONTENT_CLASS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<div[^>]*class=["'][^"']*(?:post-content|article-content|entry-content|content-body|prose)[^"']*["'][^>]*>(.*?)</div>"#,
    )
    .expect("CONTENT_CLASS_BLOCK regex")
});

/// First `<main>` block in the page.
pub static MAIN_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<main[^>]*>(.*?)</main>").expect("MAIN_BLOCK regex"));

/// `<body>` contents, the last-resort container.
pub static BODY_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("BODY_BLOCK regex"));

// =============================================================================
// Readable-Form Transcoding Patterns (plain-to-markup path)
// =============================================================================

/// Heading tags with their marker lines, shallowest first.
pub static HEADING_RULES: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("h1 regex"), "\n## ${1}\n"),
        (Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").expect("h2 regex"), "\n### ${1}\n"),
        (Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").expect("h3 regex"), "\n#### ${1}\n"),
        (Regex::new(r"(?is)<h4[^>]*>(.*?)</h4>").expect("h4 regex"), "\n##### ${1}\n"),
    ]
});

/// Paragraph bodies, kept as blank-line-delimited text.
pub static PARAGRAPH_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("PARAGRAPH_TAG regex"));

/// Line breaks.
pub static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK regex"));

/// List items, rendered as bullet lines.
pub static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("LIST_ITEM regex"));

/// Blockquotes, rendered as `>` lines.
pub static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<blockquote[^>]*>(.*?)</blockquote>").expect("BLOCKQUOTE regex"));

/// Bold spans (`strong`/`b`).
pub static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:strong|b)[^>]*>(.*?)</(?:strong|b)>").expect("BOLD_SPAN regex")
});

/// Italic spans (`em`/`i`).
pub static ITALIC_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:em|i)[^>]*>(.*?)</(?:em|i)>").expect("ITALIC_SPAN regex")
});

/// Anchors with an href; only the anchor text survives on this path.
pub static ANCHOR_WITH_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a[^>]*href=["'][^"']+["'][^>]*>(.*?)</a>"#).expect("ANCHOR_WITH_HREF regex")
});

/// Any remaining tag, stripped after the structural substitutions.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex"));

/// Three or more consecutive (possibly blank-padded) newlines.
pub static MULTIPLE_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("MULTIPLE_BLANK_LINES regex"));

/// Runs of horizontal whitespace.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE regex"));

/// Any whitespace run, for single-line collapsing.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Whitespace between a closing and an opening tag.
pub static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("INTER_TAG_WHITESPACE regex"));

/// Empty `div`/`span`/`p` containers left behind by cleaning.
pub static EMPTY_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:<div[^>]*>\s*</div>|<span[^>]*>\s*</span>|<p[^>]*>\s*</p>)")
        .expect("EMPTY_CONTAINER regex")
});

// =============================================================================
// Image Patterns
// =============================================================================

/// `<img>` tags with a quoted `src`.
pub static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img[^>]*src=["']([^"']+)["'][^>]*>"#).expect("IMG_SRC regex")
});

// =============================================================================
// Video Transcript Patterns
// =============================================================================

/// Accepted video URL shapes, probed in order.
pub static VIDEO_ID_SHAPES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .expect("watch/short-link/embed shape regex"),
        Regex::new(r"youtube\.com/shorts/([^&\n?#]+)").expect("shorts shape regex"),
    ]
});

/// Direct `"captionTracks": [...]` literal in the watch page.
pub static CAPTION_TRACKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"captionTracks":\s*(\[.*?\])"#).expect("CAPTION_TRACKS regex")
});

/// Embedded player-response JSON blob, the fallback caption source.
pub static PLAYER_RESPONSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.*?\});").expect("PLAYER_RESPONSE regex")
});

/// Raw timed-text base URL, the last-resort caption reference.
pub static TIMEDTEXT_BASE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""baseUrl"\s*:\s*"(https://www\.youtube\.com/api/timedtext[^"]+)""#)
        .expect("TIMEDTEXT_BASE_URL regex")
});

/// `fmt=` query parameter in a timed-text URL.
pub static TIMEDTEXT_FMT_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fmt=[^&]+").expect("TIMEDTEXT_FMT_PARAM regex"));

/// One `<text start=".." dur="..">..</text>` entry in XML timed text.
pub static XML_TIMEDTEXT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<text[^>]*start="([^"]*)"[^>]*dur="([^"]*)"[^>]*>(.*?)</text>"#)
        .expect("XML_TIMEDTEXT_SEGMENT regex")
});

// =============================================================================
// Highlight Injection Guards
// =============================================================================

/// Matches when the text right before a candidate span is a `<mark>` open
/// tag, i.e. the span was already wrapped by a previous pass.
pub static MARK_OPEN_BEHIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<mark[^>]*>\z").expect("MARK_OPEN_BEHIND regex"));

/// Matches when a candidate span is followed by `</mark>` before any other
/// tag, i.e. the span sits inside an existing marker's text.
pub static MARK_CLOSE_AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A[^<]*</mark>").expect("MARK_CLOSE_AHEAD regex"));
