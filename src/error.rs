//! Error types for readclip.
//!
//! This module defines the error taxonomy shared by the extraction and
//! transcript pipelines. Callers map these onto transport-level failures
//! (400 for unusable input, 500 for upstream trouble); the mapping itself
//! lives outside this crate.

/// Error type for extraction and transcript operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL does not match any recognized video reference shape.
    #[error("unrecognized video reference: {0}")]
    InvalidReference(String),

    /// Network error or non-success status fetching a remote page/API.
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// The video has no caption track data at all.
    #[error("no captions available for this video")]
    NoCaptionsAvailable,

    /// Caption tracks were listed but none carries a fetchable reference.
    #[error("no valid caption track found")]
    NoValidTrack,

    /// Malformed JSON/XML in an upstream payload.
    #[error("failed to parse upstream payload: {0}")]
    ParseFailure(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamFetch(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

/// Result type alias for extraction and transcript operations.
pub type Result<T> = std::result::Result<T, Error>;
