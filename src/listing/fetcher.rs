use crate::config::ResolverConfig;
use crate::errors::{AppError, AppResult};
use tracing::info;
use url::Url;

/// Builds the HTTP client used for the listing request.
///
/// Applies the configured user agent and, when set, the request timeout.
pub fn build_client(config: &ResolverConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Downloads the repository index page and returns its body as text.
///
/// A single GET is issued; there are no retries.
///
/// # Errors
///
/// Returns an error if:
/// - The request fails or times out (`Network`)
/// - The server answers with a non-success status (`HttpStatus`)
/// - The body cannot be read as text (`Network`)
pub async fn fetch_listing(client: &reqwest::Client, listing_url: &Url) -> AppResult<String> {
    info!(url = listing_url.as_str(), "Fetching package listing");

    let response = client.get(listing_url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus {
            status,
            url: listing_url.to_string(),
        });
    }

    let body = response.text().await?;
    info!(bytes = body.len(), "Package listing fetched");

    Ok(body)
}
