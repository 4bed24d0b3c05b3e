//! Video identification and caption-track discovery.
//!
//! A watch page embeds its caption-track listing in one of two places: a
//! direct `"captionTracks": [...]` literal, or the player-response JSON
//! blob. Both are probed here; a raw timed-text URL scan backstops the
//! literal when its JSON is too mangled to parse.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::patterns::{CAPTION_TRACKS, PLAYER_RESPONSE, TIMEDTEXT_BASE_URL, VIDEO_ID_SHAPES};

/// One caption track from the watch-page listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Timed-text endpoint for this track.
    pub base_url: Option<String>,

    /// BCP-47-ish language code (`en`, `en-US`, ...).
    pub language_code: Option<String>,

    /// Display name of the track.
    pub name: Option<TrackName>,
}

/// Display-name wrapper as it appears in page data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackName {
    /// Plain-text track label.
    pub simple_text: Option<String>,
}

/// Extract a video identifier from a URL.
///
/// Accepted shapes, probed in order: `watch?v=`, `youtu.be/`, `embed/`,
/// `shorts/`. Anything else is an [`Error::InvalidReference`].
pub fn extract_video_id(url: &str) -> Result<String> {
    for shape in VIDEO_ID_SHAPES.iter() {
        if let Some(id) = shape.captures(url).and_then(|c| c.get(1)) {
            return Ok(id.as_str().to_string());
        }
    }
    Err(Error::InvalidReference(url.to_string()))
}

/// Locate the caption-track listing in watch-page HTML.
///
/// Tries the direct literal first; if its JSON fails to parse, falls back
/// to scanning for a raw timed-text URL before giving up with
/// [`Error::ParseFailure`]. Without the literal, the embedded
/// player-response blob is probed; a page carrying neither has no
/// captions at all ([`Error::NoCaptionsAvailable`]).
pub fn locate_caption_tracks(page_html: &str) -> Result<Vec<CaptionTrack>> {
    if let Some(listing) = CAPTION_TRACKS.captures(page_html).and_then(|c| c.get(1)) {
        // the listing is often embedded inside an escaped JSON string
        let unescaped = listing.as_str().replace("\\\"", "\"").replace("\\\\u", "\\u");

        return match serde_json::from_str::<Vec<CaptionTrack>>(&unescaped) {
            Ok(tracks) => Ok(tracks),
            Err(_) => {
                if let Some(raw) = TIMEDTEXT_BASE_URL.captures(page_html).and_then(|c| c.get(1)) {
                    Ok(vec![CaptionTrack {
                        base_url: Some(raw.as_str().to_string()),
                        ..CaptionTrack::default()
                    }])
                } else {
                    Err(Error::ParseFailure("caption track listing".to_string()))
                }
            }
        };
    }

    if let Some(blob) = PLAYER_RESPONSE.captures(page_html).and_then(|c| c.get(1)) {
        if let Ok(player) = serde_json::from_str::<serde_json::Value>(blob.as_str()) {
            let tracks = player
                .get("captions")
                .and_then(|c| c.get("playerCaptionsTracklistRenderer"))
                .and_then(|r| r.get("captionTracks"))
                .cloned()
                .and_then(|v| serde_json::from_value::<Vec<CaptionTrack>>(v).ok());
            if let Some(tracks) = tracks {
                if !tracks.is_empty() {
                    return Ok(tracks);
                }
            }
        }
    }

    Err(Error::NoCaptionsAvailable)
}

/// Pick the track to fetch: English when available (by language code or
/// display name), otherwise the first listed. Returns the track's
/// timed-text URL with embedded `&` separators restored.
pub fn select_track_url(tracks: &[CaptionTrack]) -> Result<String> {
    let english = tracks.iter().find(|track| {
        matches!(
            track.language_code.as_deref(),
            Some("en" | "en-US" | "en-GB")
        ) || track
            .name
            .as_ref()
            .and_then(|n| n.simple_text.as_ref())
            .is_some_and(|name| name.to_lowercase().contains("english"))
    });

    english
        .or_else(|| tracks.first())
        .and_then(|track| track.base_url.as_deref())
        .map(|base_url| base_url.replace("\\u0026", "&"))
        .ok_or(Error::NoValidTrack)
}
