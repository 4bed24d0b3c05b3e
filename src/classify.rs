//! Source classifier.
//!
//! Maps a clipped URL onto the closed set of recognized platforms. The
//! kind picks the extraction strategy (video platforms go through the
//! transcript resolver, everything else through content extraction) and
//! feeds display labels and suggested tags to the calling layer.

use serde::{Deserialize, Serialize};

/// Recognized originating platforms for a clipped URL.
///
/// Derived, never stored: recompute from the URL on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// LinkedIn posts and articles.
    Linkedin,
    /// Substack newsletters, including custom subdomains.
    Substack,
    /// X (Twitter) posts and threads.
    X,
    /// Medium stories.
    Medium,
    /// YouTube videos, including short links and Shorts.
    Youtube,
    /// Anything unrecognized.
    #[default]
    Other,
}

/// Classify a URL by ordered substring containment.
///
/// Total and deterministic: any string input maps to exactly one kind,
/// defaulting to [`SourceKind::Other`].
#[must_use]
pub fn classify(url: &str) -> SourceKind {
    if url.contains("linkedin.com") {
        SourceKind::Linkedin
    } else if url.contains("substack.com") || url.contains(".substack.") {
        SourceKind::Substack
    } else if url.contains("twitter.com") || url.contains("x.com") {
        SourceKind::X
    } else if url.contains("medium.com") {
        SourceKind::Medium
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        SourceKind::Youtube
    } else {
        SourceKind::Other
    }
}

impl SourceKind {
    /// Human-readable platform name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Substack => "Substack",
            Self::X => "X (Twitter)",
            Self::Medium => "Medium",
            Self::Youtube => "YouTube",
            Self::Other => "Web",
        }
    }

    /// Suggested tags for a clip from this platform.
    #[must_use]
    pub fn suggested_tags(self) -> &'static [&'static str] {
        match self {
            Self::Linkedin => &["professional", "career", "business"],
            Self::Substack => &["newsletter", "opinion", "analysis"],
            Self::X => &["thread", "discussion", "trending"],
            Self::Medium => &["blog", "tech", "stories"],
            Self::Youtube => &["video", "tutorial", "learning"],
            Self::Other => &["article", "reading"],
        }
    }
}
