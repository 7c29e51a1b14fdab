//! Repository listing access.
//!
//! Fetches the package index page over HTTP and pulls the RPM entries of a
//! track out of it. The page is scanned as plain text; its HTML structure is
//! never interpreted.

mod entries;
mod fetcher;

// Re-export public API
pub use entries::{display_name, find_entries, parse_candidates, version_key};
pub use fetcher::{build_client, fetch_listing};
