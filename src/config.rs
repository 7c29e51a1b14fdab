use crate::constants::{DEFAULT_TIMEOUT_SECS, LISTING_URL, USER_AGENT};
use crate::errors::AppResult;
use std::time::Duration;
use url::Url;

/// Resolved settings for a lookup run.
///
/// `Default` gives the production values. Only the listing URL is meant to be
/// overridden, mostly so tests can point the resolver at a local server.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Directory index scanned for packages
    pub listing_url: Url,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            listing_url: Url::parse(LISTING_URL).expect("LISTING_URL is a valid URL"),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Returns the default configuration with a different listing URL.
    ///
    /// # Errors
    ///
    /// Returns `Url` if `url` cannot be parsed.
    pub fn with_listing_url(url: &str) -> AppResult<Self> {
        Ok(Self {
            listing_url: Url::parse(url)?,
            ..Self::default()
        })
    }
}
