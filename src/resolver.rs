use crate::config::ResolverConfig;
use crate::errors::{AppError, AppResult};
use crate::listing::{build_client, fetch_listing, parse_candidates};
use crate::models::{Candidate, Track};
use tracing::info;

/// Picks the candidate with the highest version.
///
/// Candidates are stably sorted by version and the last one wins, so among
/// equal versions the entry listed last on the page is returned.
///
/// # Errors
///
/// Returns `NoCandidates` when `candidates` is empty.
pub fn select_latest(mut candidates: Vec<Candidate>, prefix: &str) -> AppResult<Candidate> {
    candidates.sort_by(|a, b| a.version.cmp(&b.version));
    candidates.pop().ok_or_else(|| AppError::NoCandidates {
        prefix: prefix.to_string(),
    })
}

/// Resolves the newest package of `track` from an already fetched listing page.
pub fn resolve_from_page(page: &str, track: Track) -> AppResult<Candidate> {
    let candidates = parse_candidates(page, track)?;
    select_latest(candidates, track.prefix())
}

/// Looks up the filename of the newest package for the given track selector.
///
/// The selector is validated before any network access. Then the listing
/// named by `config` is fetched once and resolved with [`resolve_from_page`].
///
/// # Errors
///
/// Returns an error if:
/// - `selector` is not a known track (`InvalidTrack`)
/// - The listing cannot be fetched (`Network`, `HttpStatus`)
/// - No entry matches the track prefix (`NoCandidates`)
/// - A matching entry carries an invalid version (`VersionParse`)
pub async fn resolve_latest(config: &ResolverConfig, selector: &str) -> AppResult<String> {
    let track: Track = selector.parse()?;
    info!(
        track = track.display_name(),
        prefix = track.prefix(),
        "Resolving latest package"
    );

    let client = build_client(config)?;
    let page = fetch_listing(&client, &config.listing_url).await?;
    let latest = resolve_from_page(&page, track)?;

    info!(
        package = latest.name.as_str(),
        version = %latest.version,
        "Latest package resolved"
    );
    Ok(latest.name)
}
