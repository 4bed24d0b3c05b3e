//! Configuration options for extraction.
//!
//! The `Options` struct carries the tunable thresholds shared by the
//! string-based and DOM-based extraction paths, plus the outbound-fetch
//! settings used by the article and transcript pipelines.

use std::time::Duration;

/// Configuration options for extraction behavior.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use readclip::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_images: 5,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum visible text length for a DOM container to count as
    /// main content.
    ///
    /// Default: `200`
    pub min_container_text_len: usize,

    /// Minimum text length for an individual paragraph picked up by the
    /// paragraph-aggregation fallback.
    ///
    /// Default: `20`
    pub min_paragraph_len: usize,

    /// Maximum number of image URLs kept per extraction.
    ///
    /// Default: `10`
    pub max_images: usize,

    /// Start-time gap (seconds) above which a new transcript paragraph
    /// begins.
    ///
    /// Default: `30.0`
    pub paragraph_gap_secs: f64,

    /// Timeout applied to every outbound fetch. Upstream calls give no
    /// bound of their own, so one is imposed here.
    ///
    /// Default: `15s`
    pub fetch_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_container_text_len: 200,
            min_paragraph_len: 20,
            max_images: 10,
            paragraph_gap_secs: 30.0,
            fetch_timeout: Duration::from_secs(15),
        }
    }
}
