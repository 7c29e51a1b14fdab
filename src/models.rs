use crate::constants::*;
use crate::errors::AppError;
use pep440_rs::Version;
use std::fmt;
use std::str::FromStr;

/// Reindexer product line whose packages are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    V3,
    V4,
}

impl Track {
    /// Returns a human-readable name for the track.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::V3 => "Reindexer 3",
            Self::V4 => "Reindexer 4",
        }
    }

    /// Returns the RPM filename prefix used by packages of this track.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::V3 => TRACK_V3_PREFIX,
            Self::V4 => TRACK_V4_PREFIX,
        }
    }
}

impl FromStr for Track {
    type Err = AppError;

    /// Matches the selector exactly; there is no fallback track.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            TRACK_V3_SELECTOR => Ok(Self::V3),
            TRACK_V4_SELECTOR => Ok(Self::V4),
            other => Err(AppError::InvalidTrack {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A package entry found in the listing together with its parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Filename as published, without the listing marker
    pub name: String,
    /// PEP 440 version, so an RPM release `-N` orders as a post-release
    pub version: Version,
}
