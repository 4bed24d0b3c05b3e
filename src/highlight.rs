//! Highlight re-injection.
//!
//! Wraps user-highlighted passages in `<mark>` elements at render time.
//! Highlights live independently of the stored content: they are matched
//! by literal text search and re-applied to whatever ReadableContent
//! currently exists, never baked into it.
//!
//! Caller discipline: always inject into the original unwrapped content.
//! Re-running against the same unwrapped input is safe; injecting into a
//! previous injection's output with a changed highlight set is not.
//! Re-derive from the stored content on every render.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities;
use crate::patterns::{MARK_CLOSE_AHEAD, MARK_OPEN_BEHIND};

/// Highlight marker colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    /// Default marker color.
    #[default]
    Yellow,
    Green,
    Blue,
    Pink,
}

impl HighlightColor {
    /// CSS class carried by the injected marker.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Yellow => "highlight-yellow",
            Self::Green => "highlight-green",
            Self::Blue => "highlight-blue",
            Self::Pink => "highlight-pink",
        }
    }
}

/// A user-marked span of article text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Stable identifier, carried on the marker for click handling.
    pub id: String,

    /// Verbatim text expected to occur in the article content.
    pub text: String,

    /// Optional user note, rendered as the marker tooltip.
    pub note: Option<String>,

    /// Marker color.
    pub color: HighlightColor,

    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Wrap every literal occurrence of each highlight's text in a `<mark>`
/// marker carrying its id, color class, and note.
///
/// Highlights are applied longest-text-first so a highlight whose text is
/// a substring of another's never partially or doubly wraps it, and
/// matches already sitting inside a marker are skipped. Matching is
/// case-insensitive and literal (pattern metacharacters in the highlight
/// text match themselves).
#[must_use]
pub fn inject(content: &str, highlights: &[Highlight]) -> String {
    if highlights.is_empty() {
        return content.to_string();
    }

    let mut ordered: Vec<&Highlight> = highlights.iter().collect();
    ordered.sort_by(|a, b| b.text.len().cmp(&a.text.len()));

    let mut result = content.to_string();
    for highlight in ordered {
        if highlight.text.is_empty() {
            continue;
        }
        let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(&highlight.text))) else {
            continue;
        };
        result = wrap_matches(&result, &pattern, highlight);
    }

    result
}

/// Report highlights whose text no longer occurs in the content.
///
/// Content may be refetched with slightly different wording; matching is
/// best-effort string search, so affected highlights silently stop
/// rendering. This surfaces them so the calling layer can flag orphans
/// instead of dropping them without a trace.
#[must_use]
pub fn orphaned<'a>(content: &str, highlights: &'a [Highlight]) -> Vec<&'a Highlight> {
    highlights
        .iter()
        .filter(|h| {
            if h.text.is_empty() {
                return true;
            }
            match Regex::new(&format!("(?i){}", regex::escape(&h.text))) {
                Ok(pattern) => !pattern.is_match(content),
                Err(_) => true,
            }
        })
        .collect()
}

/// Find an existing highlight whose text overlaps `candidate` at a
/// boundary without either containing the other.
///
/// Injection order is well-defined for nested texts (longest first) but
/// undefined for equal-priority overlapping ones, so such highlights
/// should be rejected when created. Returns the first conflicting
/// highlight, or `None` when the candidate is safe.
#[must_use]
pub fn find_overlap<'a>(existing: &'a [Highlight], candidate: &str) -> Option<&'a Highlight> {
    let candidate = candidate.to_lowercase();
    if candidate.is_empty() {
        return None;
    }

    existing.iter().find(|h| {
        let other = h.text.to_lowercase();
        if other.is_empty() || other.contains(&candidate) || candidate.contains(&other) {
            return false;
        }
        boundary_overlap(&candidate, &other) || boundary_overlap(&other, &candidate)
    })
}

// True when some non-empty suffix of `a` is a prefix of `b`.
fn boundary_overlap(a: &str, b: &str) -> bool {
    for (idx, _) in a.char_indices().skip(1) {
        let suffix = &a[idx..];
        if suffix.len() < b.len() && b.starts_with(suffix) {
            return true;
        }
    }
    false
}

fn wrap_matches(haystack: &str, pattern: &Regex, highlight: &Highlight) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;

    for found in pattern.find_iter(haystack) {
        out.push_str(&haystack[last..found.start()]);

        let already_marked = MARK_OPEN_BEHIND.is_match(&haystack[..found.start()])
            || MARK_CLOSE_AHEAD.is_match(&haystack[found.end()..]);

        if already_marked {
            out.push_str(found.as_str());
        } else {
            let title = highlight.note.as_deref().unwrap_or("Click to view highlight");
            out.push_str(&format!(
                r#"<mark class="highlight {}" data-highlight-id="{}" title="{}">{}</mark>"#,
                highlight.color.css_class(),
                entities::encode_text(&highlight.id),
                entities::encode_text(title),
                found.as_str(),
            ));
        }

        last = found.end();
    }

    out.push_str(&haystack[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(id: &str, text: &str) -> Highlight {
        Highlight {
            id: id.to_string(),
            text: text.to_string(),
            note: None,
            color: HighlightColor::Yellow,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn wraps_literal_occurrences() {
        let out = inject("<p>AI safety matters</p>", &[highlight("h1", "safety")]);
        assert!(out.contains(r#"data-highlight-id="h1""#));
        assert!(out.contains(">safety</mark>"));
    }

    #[test]
    fn longest_text_wins_over_contained_text() {
        let content = "<p>We study AI safety here</p>";
        let highlights = [highlight("short", "AI"), highlight("long", "AI safety")];
        let out = inject(content, &highlights);

        // the longer highlight wraps the phrase once; the shorter one
        // must not add a nested marker inside it
        assert_eq!(out.matches("<mark").count(), 1);
        assert!(out.contains(">AI safety</mark>"));
        assert!(!out.contains("<mark class=\"highlight highlight-yellow\" data-highlight-id=\"short\""));
    }

    #[test]
    fn matching_is_case_insensitive_and_literal() {
        let out = inject("<p>What is 2+2 (really)?</p>", &[highlight("h", "2+2 (Really)")]);
        assert!(out.contains(">2+2 (really)</mark>"));
    }

    #[test]
    fn note_and_color_carried_on_marker() {
        let mut h = highlight("h", "word");
        h.note = Some("my \"note\"".to_string());
        h.color = HighlightColor::Blue;

        let out = inject("<p>a word here</p>", &[h]);
        assert!(out.contains("highlight-blue"));
        assert!(out.contains(r#"title="my &quot;note&quot;""#));
    }

    #[test]
    fn default_tooltip_when_no_note() {
        let out = inject("<p>a word here</p>", &[highlight("h", "word")]);
        assert!(out.contains(r#"title="Click to view highlight""#));
    }

    #[test]
    fn multiple_occurrences_all_wrapped() {
        let out = inject("<p>echo and echo again</p>", &[highlight("h", "echo")]);
        assert_eq!(out.matches("<mark").count(), 2);
    }

    #[test]
    fn empty_highlight_set_returns_content() {
        assert_eq!(inject("<p>x</p>", &[]), "<p>x</p>");
    }

    #[test]
    fn orphan_detection() {
        let highlights = [highlight("kept", "still here"), highlight("gone", "old wording")];
        let orphans = orphaned("<p>the text is still here</p>", &highlights);

        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].id, "gone");
    }

    #[test]
    fn overlap_detection_rejects_boundary_overlap() {
        let existing = [highlight("a", "the quick brown")];

        // overlaps "brown" at the boundary without nesting
        assert!(find_overlap(&existing, "brown fox jumps").is_some());
        // nested is fine - longest-first ordering handles it
        assert!(find_overlap(&existing, "quick").is_none());
        // disjoint is fine
        assert!(find_overlap(&existing, "lazy dog").is_none());
    }
}
