//! Federal state (Bundesland) codes.
//!
//! A [`Region`] selects the holiday calendar variant used when resolving
//! workdays. Codes follow the two-letter abbreviations used throughout
//! German administration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the 16 German federal states.
///
/// Serializes as its two-letter code.
///
/// # Example
///
/// ```
/// use capacity_planner::models::Region;
///
/// let region: Region = "nw".parse().unwrap();
/// assert_eq!(region, Region::NordrheinWestfalen);
/// assert_eq!(region.code(), "NW");
/// assert_eq!(region.name(), "Nordrhein-Westfalen");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Baden-Württemberg.
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    /// Bayern.
    #[serde(rename = "BY")]
    Bayern,
    /// Berlin.
    #[serde(rename = "BE")]
    Berlin,
    /// Brandenburg.
    #[serde(rename = "BB")]
    Brandenburg,
    /// Bremen.
    #[serde(rename = "HB")]
    Bremen,
    /// Hamburg.
    #[serde(rename = "HH")]
    Hamburg,
    /// Hessen.
    #[serde(rename = "HE")]
    Hessen,
    /// Mecklenburg-Vorpommern.
    #[serde(rename = "MV")]
    MecklenburgVorpommern,
    /// Niedersachsen.
    #[serde(rename = "NI")]
    Niedersachsen,
    /// Nordrhein-Westfalen.
    #[serde(rename = "NW")]
    NordrheinWestfalen,
    /// Rheinland-Pfalz.
    #[serde(rename = "RP")]
    RheinlandPfalz,
    /// Saarland.
    #[serde(rename = "SL")]
    Saarland,
    /// Sachsen.
    #[serde(rename = "SN")]
    Sachsen,
    /// Sachsen-Anhalt.
    #[serde(rename = "ST")]
    SachsenAnhalt,
    /// Schleswig-Holstein.
    #[serde(rename = "SH")]
    SchleswigHolstein,
    /// Thüringen.
    #[serde(rename = "TH")]
    Thueringen,
}

impl Region {
    /// All regions in the conventional listing order.
    pub const ALL: [Region; 16] = [
        Region::BadenWuerttemberg,
        Region::Bayern,
        Region::Berlin,
        Region::Brandenburg,
        Region::Bremen,
        Region::Hamburg,
        Region::Hessen,
        Region::MecklenburgVorpommern,
        Region::Niedersachsen,
        Region::NordrheinWestfalen,
        Region::RheinlandPfalz,
        Region::Saarland,
        Region::Sachsen,
        Region::SachsenAnhalt,
        Region::SchleswigHolstein,
        Region::Thueringen,
    ];

    /// Returns the two-letter state code.
    pub fn code(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "BW",
            Region::Bayern => "BY",
            Region::Berlin => "BE",
            Region::Brandenburg => "BB",
            Region::Bremen => "HB",
            Region::Hamburg => "HH",
            Region::Hessen => "HE",
            Region::MecklenburgVorpommern => "MV",
            Region::Niedersachsen => "NI",
            Region::NordrheinWestfalen => "NW",
            Region::RheinlandPfalz => "RP",
            Region::Saarland => "SL",
            Region::Sachsen => "SN",
            Region::SachsenAnhalt => "ST",
            Region::SchleswigHolstein => "SH",
            Region::Thueringen => "TH",
        }
    }

    /// Returns the German display name of the state.
    pub fn name(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "Baden-Württemberg",
            Region::Bayern => "Bayern",
            Region::Berlin => "Berlin",
            Region::Brandenburg => "Brandenburg",
            Region::Bremen => "Bremen",
            Region::Hamburg => "Hamburg",
            Region::Hessen => "Hessen",
            Region::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Region::Niedersachsen => "Niedersachsen",
            Region::NordrheinWestfalen => "Nordrhein-Westfalen",
            Region::RheinlandPfalz => "Rheinland-Pfalz",
            Region::Saarland => "Saarland",
            Region::Sachsen => "Sachsen",
            Region::SachsenAnhalt => "Sachsen-Anhalt",
            Region::SchleswigHolstein => "Schleswig-Holstein",
            Region::Thueringen => "Thüringen",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = EngineError;

    /// Parses a state code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Region::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| EngineError::UnknownRegion {
                code: s.to_string(),
            })
    }
}
