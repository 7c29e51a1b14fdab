// Data source URL
pub const LISTING_URL: &str = "http://repo.restream.ru/itv-api-ng/7/x86_64/";

// CLI defaults
pub const DEFAULT_TRACK: &str = "3";
pub const TRACK_HELP_TEXT: &str = "Reindexer major version to look up: '3' or '4'";

// Track selectors and the RPM filename prefix each one maps to
pub const TRACK_V3_SELECTOR: &str = "3";
pub const TRACK_V4_SELECTOR: &str = "4";
pub const TRACK_V3_PREFIX: &str = "reindexer-server-";
pub const TRACK_V4_PREFIX: &str = "reindexer-4-server-";

// Listing page patterns
/// Character preceding every filename in the index page (closing `>` of the anchor tag).
pub const ENTRY_MARKER: char = '>';
pub const PACKAGE_EXTENSION: &str = ".rpm";
/// Length of the `.x86_64.rpm` tail that follows the version key.
pub const PACKAGE_TAIL_LEN: usize = 11;

// HTTP client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
