use serde::{Deserialize, Serialize};

/// Release regions as coded by the IGDB `release_dates.region` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    NorthAmerica,
    Australia,
    NewZealand,
    Japan,
    China,
    Asia,
    /// Region-free / simultaneous worldwide release
    Worldwide,
    Korea,
    Brazil,
    Other,
}

const ALL_REGIONS: &[Region] = &[
    Region::Europe,
    Region::NorthAmerica,
    Region::Australia,
    Region::NewZealand,
    Region::Japan,
    Region::China,
    Region::Asia,
    Region::Worldwide,
    Region::Korea,
    Region::Brazil,
    Region::Other,
];

/// Regions in the order they are tried when neither hint matched, most
/// preferred first.
pub static REGION_PREFERENCE: [Region; 11] = [
    Region::Worldwide,
    Region::NorthAmerica,
    Region::Europe,
    Region::Japan,
    Region::Australia,
    Region::NewZealand,
    Region::Korea,
    Region::Brazil,
    Region::China,
    Region::Asia,
    Region::Other,
];

/// Label used for region codes outside the known set.
pub const UNKNOWN_REGION_LABEL: &str = "Unknown";

impl Region {
    /// Returns every region in code order.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }

    /// Returns the catalog's numeric code for this region.
    pub fn code(&self) -> u32 {
        match self {
            Self::Europe => 1,
            Self::NorthAmerica => 2,
            Self::Australia => 3,
            Self::NewZealand => 4,
            Self::Japan => 5,
            Self::China => 6,
            Self::Asia => 7,
            Self::Worldwide => 8,
            Self::Korea => 9,
            Self::Brazil => 10,
            Self::Other => 11,
        }
    }

    /// Returns the display label for this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Australia => "Australia",
            Self::NewZealand => "New Zealand",
            Self::Japan => "Japan",
            Self::China => "China",
            Self::Asia => "Asia",
            Self::Worldwide => "Worldwide",
            Self::Korea => "Korea",
            Self::Brazil => "Brazil",
            Self::Other => "Other",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        ALL_REGIONS.iter().copied().find(|r| r.code() == code)
    }

    /// Map an optional region code to its label, `"Unknown"` when the code is
    /// missing or unrecognized.
    pub fn label_for_code(code: Option<u32>) -> &'static str {
        code.and_then(Self::from_code)
            .map(|r| r.name())
            .unwrap_or(UNKNOWN_REGION_LABEL)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string is neither a region code nor a region label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: '{0}'")]
pub struct RegionParseError(pub String);

impl std::str::FromStr for Region {
    type Err = RegionParseError;

    /// Parse a region from its numeric code or its label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| RegionParseError(s.to_string()));
        }
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
