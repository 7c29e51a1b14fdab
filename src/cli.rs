use crate::config::ResolverConfig;
use crate::constants::{DEFAULT_TRACK, TRACK_HELP_TEXT};
use crate::errors::AppResult;
use crate::resolver::resolve_latest;
use clap::{Arg, ArgAction, ArgMatches, Command};

// CLI metadata constants
const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the argument parser.
///
/// `-v/--version` selects the track, so clap's own version flag is disabled.
pub fn build_command() -> Command<'static> {
    Command::new(APP_NAME)
        .about(APP_ABOUT)
        .disable_version_flag(true)
        .arg(
            Arg::new("track")
                .short('v')
                .long("version")
                .value_name("TRACK")
                .help(TRACK_HELP_TEXT)
                .default_value(DEFAULT_TRACK)
                .action(ArgAction::Set),
        )
}

fn track_selector(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("track")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_TRACK)
}

/// Parses command-line arguments, resolves the newest package and prints it.
///
/// Prints exactly one line on stdout on success. Everything else (logs,
/// errors) goes to stderr.
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let name = resolve_latest(&ResolverConfig::default(), track_selector(&matches)).await?;
    println!("{name}");
    Ok(())
}
