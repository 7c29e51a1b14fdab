use crate::constants::{ENTRY_MARKER, PACKAGE_EXTENSION, PACKAGE_TAIL_LEN};
use crate::errors::{AppError, AppResult};
use crate::models::{Candidate, Track};
use pep440_rs::Version;
use regex::Regex;
use tracing::{debug, info};

// Characters allowed between the prefix and the extension. Stops a match at
// the end of the anchor text instead of running to the last `.rpm` on the line.
const FILENAME_BODY_PATTERN: &str = r#"[^<>"' \t\r\n]*"#;

/// Builds the pattern matching `<marker><prefix><filename body>.rpm`.
fn entry_regex(prefix: &str) -> AppResult<Regex> {
    let pattern = format!(
        "{}{}{}{}",
        regex::escape(&ENTRY_MARKER.to_string()),
        regex::escape(prefix),
        FILENAME_BODY_PATTERN,
        regex::escape(PACKAGE_EXTENSION),
    );
    Ok(Regex::new(&pattern)?)
}

/// Returns every non-overlapping entry for `prefix` in the page, marker included.
pub fn find_entries<'a>(page: &'a str, prefix: &str) -> AppResult<Vec<&'a str>> {
    let re = entry_regex(prefix)?;
    Ok(re.find_iter(page).map(|m| m.as_str()).collect())
}

/// Strips the leading listing marker from a raw entry.
pub fn display_name(entry: &str) -> &str {
    entry.strip_prefix(ENTRY_MARKER).unwrap_or(entry)
}

/// Cuts the version key out of a raw entry.
///
/// The key starts right after `<marker><prefix>` and ends before the fixed
/// `.x86_64.rpm` tail. Returns `None` when the entry is too short to hold one.
pub fn version_key<'a>(entry: &'a str, prefix: &str) -> Option<&'a str> {
    let start = ENTRY_MARKER.len_utf8() + prefix.len();
    let end = entry.len().checked_sub(PACKAGE_TAIL_LEN)?;
    if end < start {
        return None;
    }
    entry.get(start..end)
}

fn parse_entry(entry: &str, prefix: &str) -> AppResult<Candidate> {
    let name = display_name(entry).to_string();
    let key = version_key(entry, prefix).ok_or_else(|| AppError::VersionParse {
        entry: name.clone(),
        key: String::new(),
        reason: "entry too short to hold a version".to_string(),
    })?;
    let version = key.parse::<Version>().map_err(|e| AppError::VersionParse {
        entry: name.clone(),
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    debug!(entry = name.as_str(), version = %version, "Parsed package entry");
    Ok(Candidate { name, version })
}

/// Extracts every package of `track` from the listing page.
///
/// # Errors
///
/// Returns `VersionParse` on the first entry whose version key is not a
/// valid PEP 440 version. Entries are never skipped.
pub fn parse_candidates(page: &str, track: Track) -> AppResult<Vec<Candidate>> {
    let prefix = track.prefix();
    let entries = find_entries(page, prefix)?;
    info!(
        track = track.display_name(),
        entries_found = entries.len(),
        "Scanned package listing"
    );

    entries
        .into_iter()
        .map(|entry| parse_entry(entry, prefix))
        .collect()
}
