//! Timed-text payload parsing.
//!
//! A caption track serves two formats from the same base URL: the
//! structured `json3` format and a legacy XML format. JSON is attempted
//! first; XML is the fallback for any failure. Both parse into the same
//! flat, source-ordered segment list.

use serde::Deserialize;

use crate::entities;
use crate::error::Result;
use crate::patterns::{TIMEDTEXT_FMT_PARAM, WHITESPACE_RUN, XML_TIMEDTEXT_SEGMENT};
use crate::result::TranscriptSegment;

#[derive(Debug, Deserialize)]
struct Json3Payload {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Json3Event {
    #[serde(default)]
    t_start_ms: f64,
    #[serde(default)]
    d_duration_ms: f64,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

/// Rewrite a track base URL to request the json3 format.
#[must_use]
pub fn json3_url(base_url: &str) -> String {
    if base_url.contains("fmt=") {
        TIMEDTEXT_FMT_PARAM.replace(base_url, "fmt=json3").into_owned()
    } else {
        format!("{base_url}&fmt=json3")
    }
}

/// Rewrite a track base URL to request the XML format (no `fmt` param).
#[must_use]
pub fn xml_url(base_url: &str) -> String {
    TIMEDTEXT_FMT_PARAM
        .replace(base_url, "")
        .replace("&&", "&")
}

/// Normalize one segment's caption text: decode entities, flatten
/// literal `\n` sequences, collapse whitespace runs.
#[must_use]
pub fn normalize_caption_text(text: &str) -> String {
    let decoded = entities::decode(text).replace("\\n", " ");
    WHITESPACE_RUN.replace_all(&decoded, " ").trim().to_string()
}

/// Parse a json3 timed-text payload into ordered segments.
///
/// Events without text segments are skipped, as are events whose joined
/// text is empty or a bare newline. Times convert from milliseconds to
/// seconds.
pub fn parse_json3(payload: &str) -> Result<Vec<TranscriptSegment>> {
    let data: Json3Payload = serde_json::from_str(payload)?;
    let mut segments = Vec::new();

    for event in data.events {
        let Some(segs) = event.segs else { continue };
        let text: String = segs
            .into_iter()
            .filter_map(|seg| seg.utf8)
            .collect::<Vec<_>>()
            .join("");
        let text = text.trim().to_string();

        if text.is_empty() || text == "\n" {
            continue;
        }

        segments.push(TranscriptSegment {
            text: normalize_caption_text(&text),
            start: event.t_start_ms / 1000.0,
            duration: event.d_duration_ms / 1000.0,
        });
    }

    Ok(segments)
}

/// Parse an XML timed-text payload into ordered segments.
///
/// Entries look like `<text start="1.5" dur="3.2">Hello</text>`; malformed
/// numbers default to zero and whitespace-only entries are dropped.
#[must_use]
pub fn parse_xml(payload: &str) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();

    for caps in XML_TIMEDTEXT_SEGMENT.captures_iter(payload) {
        let start = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()).unwrap_or(0.0);
        let duration = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()).unwrap_or(0.0);
        let text = caps.get(3).map(|m| normalize_caption_text(m.as_str())).unwrap_or_default();

        if text.is_empty() {
            continue;
        }

        segments.push(TranscriptSegment { text, start, duration });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json3_url_replaces_or_appends_fmt() {
        assert_eq!(
            json3_url("https://t/x?v=1&fmt=srv3&lang=en"),
            "https://t/x?v=1&fmt=json3&lang=en"
        );
        assert_eq!(json3_url("https://t/x?v=1"), "https://t/x?v=1&fmt=json3");
    }

    #[test]
    fn xml_url_drops_fmt() {
        assert_eq!(xml_url("https://t/x?v=1&fmt=srv3&lang=en"), "https://t/x?v=1&lang=en");
        assert_eq!(xml_url("https://t/x?v=1"), "https://t/x?v=1");
    }

    #[test]
    fn parses_json3_events() {
        let payload = r#"{"events":[
            {"tStartMs":0,"dDurationMs":2000,"segs":[{"utf8":"hello "},{"utf8":"there"}]},
            {"tStartMs":2500,"dDurationMs":1500,"segs":[{"utf8":"\n"}]},
            {"tStartMs":4000,"dDurationMs":1000,"segs":[{"utf8":"again"}]},
            {"tStartMs":9000,"dDurationMs":500}
        ]}"#;
        let segments = parse_json3(payload).unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "hello there");
        assert!((segments[0].start - 0.0).abs() < 1e-9);
        assert!((segments[0].duration - 2.0).abs() < 1e-9);
        assert_eq!(segments[1].text, "again");
        assert!((segments[1].start - 4.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_json3_is_a_parse_failure() {
        assert!(parse_json3("{nope").is_err());
    }

    #[test]
    fn parses_xml_entries() {
        let payload = r#"<transcript>
            <text start="0" dur="5.2">Hello &amp; welcome</text>
            <text start="5.2" dur="3">   </text>
            <text start="8.2" dur="2.5">to the show</text>
        </transcript>"#;
        let segments = parse_xml(payload);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Hello & welcome");
        assert!((segments[0].duration - 5.2).abs() < 1e-9);
        assert_eq!(segments[1].text, "to the show");
        assert!((segments[1].start - 8.2).abs() < 1e-9);
    }

    #[test]
    fn xml_defaults_malformed_numbers_to_zero() {
        let segments = parse_xml(r#"<text start="x" dur="y">words</text>"#);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].start - 0.0).abs() < 1e-9);
        assert!((segments[0].duration - 0.0).abs() < 1e-9);
    }

    #[test]
    fn caption_text_normalization() {
        assert_eq!(normalize_caption_text("it&#39;s\\nfine   now"), "it's fine now");
        assert_eq!(normalize_caption_text("  spaced\tout  "), "spaced out");
    }

    #[test]
    fn segment_order_is_preserved_not_sorted() {
        // out-of-order source captions stay in source order
        let payload = r#"{"events":[
            {"tStartMs":5000,"dDurationMs":100,"segs":[{"utf8":"later"}]},
            {"tStartMs":1000,"dDurationMs":100,"segs":[{"utf8":"earlier"}]}
        ]}"#;
        let segments = parse_json3(payload).unwrap();
        assert_eq!(segments[0].text, "later");
        assert_eq!(segments[1].text, "earlier");
    }
}
