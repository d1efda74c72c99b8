use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trading venues with simulated books
///
/// Snapshots carry the venue as an opaque string; this enum is the set the
/// mock provider and order form know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    #[serde(rename = "OKX")]
    Okx,
    Bybit,
    Deribit,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Okx, Venue::Bybit, Venue::Deribit];

    /// Display name as used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Okx => "OKX",
            Venue::Bybit => "Bybit",
            Venue::Deribit => "Deribit",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown venue: {0}")]
pub struct ParseVenueError(pub String);

impl FromStr for Venue {
    type Err = ParseVenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Venue::ALL
            .into_iter()
            .find(|venue| venue.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVenueError(s.to_string()))
    }
}
