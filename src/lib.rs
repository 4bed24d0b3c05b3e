//! # readclip
//!
//! Content-extraction core for a read-it-later article manager.
//!
//! Given raw page markup (HTML fetched server-side, or the document a
//! browser clipper is sitting on) or a video-platform caption payload,
//! this library produces a clean, re-renderable article body plus a
//! bounded set of associated images. It also re-injects user highlights
//! into previously extracted content at render time.
//!
//! Storage, auth, scheduling, and UI are external collaborators: they
//! call into this pipeline and consume its output, nothing more.
//!
//! ## Quick Start
//!
//! ```rust
//! use readclip::{extract_article, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><h1>My Article</h1><p>Main content here.</p></article></body></html>"#;
//!
//! let article = extract_article(html, "https://example.com/post", &Options::default());
//! assert!(article.content.contains("Main content here."));
//! ```
//!
//! ## Pipelines
//!
//! - **Server fetch** ([`fetch_article`]): fetch a URL, locate the main
//!   content as a string fragment, sanitize, and emit the
//!   paragraph-marked readable form.
//! - **In-page capture** ([`capture_page`]): same heuristics over a
//!   parsed document, keeping cleaned semantic HTML.
//! - **Video transcript** ([`resolve_transcript`]): caption discovery,
//!   timed-text parsing, and paragraph grouping for video URLs.
//! - **Highlight re-injection** ([`inject_highlights`]): idempotent
//!   text-span wrapping over stored content at render time.

mod error;
mod http;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Shared heuristic rule tables consumed by the string and DOM adapters.
pub mod rules;

/// HTML character entity decoding.
pub mod entities;

/// Markup sanitizer for raw HTML fragments.
pub mod sanitize;

/// Structural content locator (string and DOM modes).
pub mod locate;

/// Readable-form transcoder (HTML-preserving and plain-to-markup).
pub mod transcode;

/// Image collection, filtering, and absolutization.
pub mod images;

/// Page metadata extraction (title, author, description, main image).
pub mod metadata;

/// Source platform classification.
pub mod classify;

/// Highlight re-injection and bookkeeping.
pub mod highlight;

/// Server-side article fetch and extraction.
pub mod fetch;

/// In-page content capture for the browser clipper.
pub mod capture;

/// Video transcript resolution.
pub mod transcript;

/// URL validation and resolution utilities.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use capture::capture_page;
pub use classify::{classify, SourceKind};
pub use error::{Error, Result};
pub use fetch::{extract_article, fetch_article};
pub use highlight::{inject as inject_highlights, Highlight, HighlightColor};
pub use options::Options;
pub use result::{ArticleContent, PageCapture, TranscriptSegment, VideoTranscript};
pub use transcript::resolve_transcript;
