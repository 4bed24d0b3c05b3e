//! Transcript paragraph grouping.
//!
//! Caption segments are a few seconds each; rendering them one per line
//! is unreadable. Consecutive segments are grouped into paragraphs, with
//! a new paragraph starting whenever the gap between start times exceeds
//! the configured threshold.

use crate::result::TranscriptSegment;

/// Group segments into paragraph texts.
///
/// Walks segments in order; a segment whose start time is more than
/// `gap_secs` after the previous segment's start opens a new paragraph.
/// Texts within a paragraph join with single spaces.
#[must_use]
pub fn group_into_paragraphs(segments: &[TranscriptSegment], gap_secs: f64) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut last_start = 0.0_f64;

    for segment in segments {
        if segment.start - last_start > gap_secs && !current.is_empty() {
            paragraphs.push(current.join(" "));
            current.clear();
        }
        current.push(&segment.text);
        last_start = segment.start;
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Render grouped paragraphs as `<p>`-wrapped blocks separated by blank
/// lines.
#[must_use]
pub fn render_paragraphs(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .map(|p| format!("<p>{p}</p>"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, start: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration: 1.0,
        }
    }

    #[test]
    fn splits_only_past_the_gap_threshold() {
        let segments = [segment("a", 0.0), segment("b", 10.0), segment("c", 45.0)];
        let paragraphs = group_into_paragraphs(&segments, 30.0);

        // gap 10 stays together, gap 35 splits
        assert_eq!(paragraphs, vec!["a b".to_string(), "c".to_string()]);
    }

    #[test]
    fn gap_exactly_at_threshold_does_not_split() {
        let segments = [segment("a", 0.0), segment("b", 30.0)];
        let paragraphs = group_into_paragraphs(&segments, 30.0);
        assert_eq!(paragraphs, vec!["a b".to_string()]);
    }

    #[test]
    fn empty_input_yields_no_paragraphs() {
        assert!(group_into_paragraphs(&[], 30.0).is_empty());
    }

    #[test]
    fn renders_paragraph_blocks() {
        let rendered = render_paragraphs(&["one two".to_string(), "three".to_string()]);
        assert_eq!(rendered, "<p>one two</p>\n\n<p>three</p>");
    }

    #[test]
    fn single_paragraph_renders_without_separator() {
        assert_eq!(render_paragraphs(&["only".to_string()]), "<p>only</p>");
    }
}
