//! Transcript resolution scenarios: identification, track discovery and
//! selection, timed-text parsing, grouping, and degraded results. All
//! network-free; the fetch plumbing is exercised through its pure parts.

use readclip::transcript::paragraphs::{group_into_paragraphs, render_paragraphs};
use readclip::transcript::timedtext::{parse_json3, parse_xml};
use readclip::transcript::tracks::{locate_caption_tracks, select_track_url};
use readclip::transcript::{absorb_transcript_failure, extract_video_id, TranscriptText};
use readclip::{Error, TranscriptSegment};

#[test]
fn video_id_extraction_scenarios() {
    assert_eq!(extract_video_id("https://youtu.be/abc123").unwrap(), "abc123");
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=xyz789&t=10").unwrap(),
        "xyz789"
    );
    assert!(matches!(
        extract_video_id("https://example.com/abc123"),
        Err(Error::InvalidReference(_))
    ));
}

#[test]
fn paragraph_grouping_boundary() {
    let segments = [
        TranscriptSegment { text: "a".into(), start: 0.0, duration: 5.0 },
        TranscriptSegment { text: "b".into(), start: 10.0, duration: 5.0 },
        TranscriptSegment { text: "c".into(), start: 45.0, duration: 5.0 },
    ];
    let paragraphs = group_into_paragraphs(&segments, 30.0);

    assert_eq!(paragraphs, vec!["a b".to_string(), "c".to_string()]);
    assert_eq!(render_paragraphs(&paragraphs), "<p>a b</p>\n\n<p>c</p>");
}

#[test]
fn segments_keep_source_order() {
    let xml = r#"<text start="20" dur="2">second</text><text start="5" dur="2">first</text>"#;
    let segments = parse_xml(xml);

    assert_eq!(segments[0].text, "second");
    assert_eq!(segments[1].text, "first");
}

#[test]
fn json3_and_xml_agree_on_equivalent_payloads() {
    let json = r#"{"events":[
        {"tStartMs":1000,"dDurationMs":2000,"segs":[{"utf8":"hello world"}]},
        {"tStartMs":4000,"dDurationMs":2000,"segs":[{"utf8":"goodbye"}]}
    ]}"#;
    let xml = r#"<transcript>
        <text start="1" dur="2">hello world</text>
        <text start="4" dur="2">goodbye</text>
    </transcript>"#;

    assert_eq!(parse_json3(json).unwrap(), parse_xml(xml));
}

#[test]
fn caption_discovery_from_page_data() {
    let direct = r#"<script>"captionTracks": [{"baseUrl":"https://www.youtube.com/api/timedtext?v=a","languageCode":"en"}]</script>"#;
    let tracks = locate_caption_tracks(direct).unwrap();
    assert_eq!(
        select_track_url(&tracks).unwrap(),
        "https://www.youtube.com/api/timedtext?v=a"
    );

    let embedded = r#"ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=b","languageCode":"fr"}]}}};"#;
    let tracks = locate_caption_tracks(embedded).unwrap();
    assert_eq!(
        select_track_url(&tracks).unwrap(),
        "https://www.youtube.com/api/timedtext?v=b"
    );
}

#[test]
fn captionless_page_degrades_not_fails() {
    let page = "<html><body>a video page with no caption data</body></html>";
    let err = locate_caption_tracks(page).unwrap_err();
    assert!(matches!(err, Error::NoCaptionsAvailable));

    // the resolver absorbs that failure into the degraded-success shape
    let degraded = absorb_transcript_failure(Err(err));
    assert_eq!(degraded, TranscriptText::default());
    assert!(degraded.text.is_empty());
    assert!(degraded.segments.is_empty());
}

#[test]
fn track_selection_prefers_english_else_first() {
    let page = r#""captionTracks": [
        {"baseUrl":"https://t/ko","languageCode":"ko"},
        {"baseUrl":"https://t/en-us","languageCode":"en-US"}
    ]"#;
    let tracks = locate_caption_tracks(page).unwrap();
    assert_eq!(select_track_url(&tracks).unwrap(), "https://t/en-us");

    let page = r#""captionTracks": [
        {"baseUrl":"https://t/ko","languageCode":"ko"},
        {"baseUrl":"https://t/ja","languageCode":"ja"}
    ]"#;
    let tracks = locate_caption_tracks(page).unwrap();
    assert_eq!(select_track_url(&tracks).unwrap(), "https://t/ko");
}

#[test]
fn caption_text_is_decoded_and_flattened() {
    let xml = r#"<text start="0" dur="2">it&#39;s &quot;live&quot;\nnow</text>"#;
    let segments = parse_xml(xml);
    assert_eq!(segments[0].text, r#"it's "live" now"#);
}

#[test]
fn grouped_transcript_renders_paragraph_blocks() {
    let segments = [
        TranscriptSegment { text: "intro words".into(), start: 0.0, duration: 4.0 },
        TranscriptSegment { text: "more intro".into(), start: 4.0, duration: 4.0 },
        TranscriptSegment { text: "new topic".into(), start: 60.0, duration: 4.0 },
    ];
    let rendered = render_paragraphs(&group_into_paragraphs(&segments, 30.0));

    assert_eq!(rendered, "<p>intro words more intro</p>\n\n<p>new topic</p>");
}
