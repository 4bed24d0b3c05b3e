//! Video transcript resolver.
//!
//! Per-request state machine for turning a video URL into readable
//! transcript text: identify the video, locate its caption tracks in the
//! watch page, select a track, fetch and parse the timed text, and group
//! segments into paragraphs. Lightweight oEmbed metadata is fetched
//! concurrently with the transcript.
//!
//! Failure handling is asymmetric on purpose: a transcript failure
//! degrades to an empty result (`has_transcript: false`) so caption
//! availability never blocks a save, while a metadata failure fails the
//! request: there is no safe substitute for a title.

pub mod paragraphs;
pub mod timedtext;
pub mod tracks;

pub use tracks::extract_video_id;

use reqwest::Client;

use crate::error::{Error, Result};
use crate::http;
use crate::options::Options;
use crate::result::{TranscriptSegment, VideoTranscript};

/// Transcript text with its underlying segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptText {
    /// Paragraph-grouped `<p>`-wrapped rendering; empty when no captions
    /// were recovered.
    pub text: String,

    /// Flat ordered segment list.
    pub segments: Vec<TranscriptSegment>,
}

/// Video title/author/thumbnail from oEmbed metadata.
#[derive(Debug, Clone, Default)]
struct VideoMeta {
    title: String,
    author: String,
    thumbnail: String,
}

/// Resolve a video URL into transcript text and display metadata.
///
/// Metadata and transcript are fetched concurrently. Transcript failures
/// of any kind are absorbed into a degraded success; see the module docs
/// for why metadata failures are not.
pub async fn resolve_transcript(url: &str, options: &Options) -> Result<VideoTranscript> {
    let video_id = tracks::extract_video_id(url)?;
    let client = http::client(options)?;

    let (meta, transcript) = tokio::join!(
        fetch_metadata(&client, &video_id),
        fetch_transcript(&client, &video_id, options),
    );

    let meta = meta?;
    let transcript = absorb_transcript_failure(transcript);
    let has_transcript = !transcript.text.is_empty();

    Ok(VideoTranscript {
        video_id,
        title: meta.title,
        author: meta.author,
        thumbnail: meta.thumbnail,
        transcript: transcript.text,
        segments: transcript.segments,
        has_transcript,
    })
}

/// Downgrade a failed transcript fetch to the empty-transcript shape.
///
/// Callers save the video either way; the absence of captions only
/// reduces the richness of the stored content.
#[must_use]
pub fn absorb_transcript_failure(result: Result<TranscriptText>) -> TranscriptText {
    match result {
        Ok(transcript) => transcript,
        Err(err) => {
            tracing::warn!(error = %err, "transcript fetch failed, degrading to empty result");
            TranscriptText::default()
        }
    }
}

async fn fetch_transcript(
    client: &Client,
    video_id: &str,
    options: &Options,
) -> Result<TranscriptText> {
    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");

    tracing::debug!(video_id, "fetching watch page for caption tracks");
    let response = client
        .get(&watch_url)
        .header(reqwest::header::USER_AGENT, http::BROWSER_USER_AGENT)
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(reqwest::header::ACCEPT, http::HTML_ACCEPT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::UpstreamFetch(format!(
            "watch page returned status {}",
            response.status()
        )));
    }

    let page = response.text().await?;
    let caption_tracks = tracks::locate_caption_tracks(&page)?;
    let base_url = tracks::select_track_url(&caption_tracks)?;

    let segments = fetch_timed_text(client, &base_url).await?;
    let grouped = paragraphs::group_into_paragraphs(&segments, options.paragraph_gap_secs);

    Ok(TranscriptText {
        text: paragraphs::render_paragraphs(&grouped),
        segments,
    })
}

/// Fetch timed text for a track, JSON format first, XML on any failure.
async fn fetch_timed_text(client: &Client, base_url: &str) -> Result<Vec<TranscriptSegment>> {
    match fetch_json3(client, base_url).await {
        Ok(segments) => Ok(segments),
        Err(err) => {
            tracing::debug!(error = %err, "json3 timed text unavailable, falling back to XML");
            fetch_xml(client, base_url).await
        }
    }
}

async fn fetch_json3(client: &Client, base_url: &str) -> Result<Vec<TranscriptSegment>> {
    let response = client.get(timedtext::json3_url(base_url)).send().await?;
    if !response.status().is_success() {
        return Err(Error::UpstreamFetch(format!(
            "timed text returned status {}",
            response.status()
        )));
    }
    timedtext::parse_json3(&response.text().await?)
}

async fn fetch_xml(client: &Client, base_url: &str) -> Result<Vec<TranscriptSegment>> {
    let response = client.get(timedtext::xml_url(base_url)).send().await?;
    if !response.status().is_success() {
        return Err(Error::UpstreamFetch(format!(
            "timed text returned status {}",
            response.status()
        )));
    }
    Ok(timedtext::parse_xml(&response.text().await?))
}

async fn fetch_metadata(client: &Client, video_id: &str) -> Result<VideoMeta> {
    let oembed_url = format!(
        "https://www.youtube.com/oembed?url=https://www.youtube.com/watch?v={video_id}&format=json"
    );

    let response = client.get(&oembed_url).send().await?;
    if !response.status().is_success() {
        return Err(Error::UpstreamFetch(format!(
            "oembed returned status {}",
            response.status()
        )));
    }

    let data: serde_json::Value = response.json().await?;

    Ok(VideoMeta {
        title: data
            .get("title")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Untitled Video")
            .to_string(),
        author: data
            .get("author_name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Unknown")
            .to_string(),
        thumbnail: format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg"),
    })
}
