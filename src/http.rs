//! Outbound HTTP client construction.
//!
//! All fetches share one client shape: bounded timeout (upstream gives no
//! bound of its own) and a desktop-browser user agent, since several
//! upstream pages serve degraded markup to obvious bots. No retries; a
//! retry is a user-initiated action at the calling layer.

use reqwest::Client;

use crate::error::{Error, Result};
use crate::options::Options;

/// User agent for article fetches.
pub(crate) const CLIPPER_USER_AGENT: &str = "Mozilla/5.0 (compatible; readclip/0.1)";

/// User agent for video watch-page fetches; caption data is only embedded
/// for browser-like clients.
pub(crate) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with page fetches.
pub(crate) const HTML_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Build a client with the shared timeout policy.
pub(crate) fn client(options: &Options) -> Result<Client> {
    Client::builder()
        .timeout(options.fetch_timeout)
        .build()
        .map_err(|err| Error::UpstreamFetch(err.to_string()))
}
