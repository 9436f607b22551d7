//! Release selection: pick one regional release out of a game's release
//! entries and derive the date, platform and region labels shown for it.

use chrono::{DateTime, Datelike};

use backlog_core::{Region, normalize_platform_id};

use crate::types::{Candidate, PlatformRef, ReleaseEntry};

/// Platform and region the user has picked, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHints {
    platform: Option<String>,
    region: u32,
}

impl Default for ReleaseHints {
    fn default() -> Self {
        Self {
            platform: None,
            region: Region::Worldwide.code(),
        }
    }
}

impl ReleaseHints {
    /// Build hints from raw request values.
    ///
    /// The platform id is normalized the same way release entries are; an
    /// empty platform counts as absent. The region may be a numeric code or a
    /// label such as `"North America"`; anything else, or nothing, means
    /// Worldwide.
    pub fn new(platform: Option<&str>, region: Option<&str>) -> Self {
        let platform = platform
            .map(normalize_platform_id)
            .filter(|p| !p.is_empty());
        let region = region
            .map(str::trim)
            .and_then(|r| {
                r.parse::<u32>()
                    .ok()
                    .or_else(|| r.parse::<Region>().ok().map(|reg| reg.code()))
            })
            .unwrap_or(Region::Worldwide.code());
        Self { platform, region }
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn region(&self) -> u32 {
        self.region
    }

    fn matches_platform(&self, entry: &ReleaseEntry) -> bool {
        match (&self.platform, &entry.platform) {
            (Some(hint), Some(platform)) => hint == platform,
            _ => false,
        }
    }
}

/// Which fallback level produced the selected release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveTier {
    /// Matched both the platform and the region hint.
    PlatformAndRegion,
    /// Matched the platform hint in some other region.
    Platform,
    /// Matched the region hint on some other platform.
    Region,
    /// First region in the preference order that had a dated release.
    Preferred(Region),
}

impl std::fmt::Display for ResolveTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlatformAndRegion => write!(f, "platform+region"),
            Self::Platform => write!(f, "platform"),
            Self::Region => write!(f, "region"),
            Self::Preferred(region) => write!(f, "preferred region {}", region),
        }
    }
}

/// A chosen release entry and the tier that chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub tier: ResolveTier,
    pub entry: &'a ReleaseEntry,
}

/// Release-derived fields of a game's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub tier: Option<ResolveTier>,
    /// `YYYY-MM-DD`, or empty when no usable timestamp exists.
    pub release_date: String,
    pub platform: String,
    pub region: String,
}

/// Choose the best release entry for `hints`.
///
/// Tiers are tried in order and the first one with any dated entry wins;
/// within a tier the earliest date wins, ties going to the entry listed
/// first. Undated entries never match, so they never stop the fallthrough.
pub fn select_release<'a>(
    entries: &'a [ReleaseEntry],
    hints: &ReleaseHints,
    preference: &[Region],
) -> Option<Selection<'a>> {
    let dated = || entries.iter().filter(|e| e.date.is_some());
    let pick = |tier: ResolveTier, found: Option<&'a ReleaseEntry>| {
        found.map(|entry| Selection { tier, entry })
    };

    if hints.platform.is_some() {
        let both = earliest(
            dated().filter(|e| hints.matches_platform(e) && e.region == Some(hints.region)),
        );
        if let Some(sel) = pick(ResolveTier::PlatformAndRegion, both) {
            return Some(sel);
        }

        let platform_only = earliest(dated().filter(|e| hints.matches_platform(e)));
        if let Some(sel) = pick(ResolveTier::Platform, platform_only) {
            return Some(sel);
        }
    }

    let region_only = earliest(dated().filter(|e| e.region == Some(hints.region)));
    if let Some(sel) = pick(ResolveTier::Region, region_only) {
        return Some(sel);
    }

    for &region in preference {
        let in_region: Vec<&ReleaseEntry> = dated()
            .filter(|e| e.region == Some(region.code()))
            .collect();
        if in_region.is_empty() {
            continue;
        }
        // Prefer the hinted platform within the region when it is present there.
        let on_platform: Vec<&ReleaseEntry> = in_region
            .iter()
            .copied()
            .filter(|e| hints.matches_platform(e))
            .collect();
        let narrowed = if on_platform.is_empty() {
            in_region
        } else {
            on_platform
        };
        return pick(ResolveTier::Preferred(region), earliest(narrowed.into_iter()));
    }

    None
}

fn earliest<'a>(entries: impl Iterator<Item = &'a ReleaseEntry>) -> Option<&'a ReleaseEntry> {
    entries.min_by_key(|e| e.date)
}

/// Select a release for `candidate` and derive its display fields.
pub fn resolve_release(
    candidate: &Candidate,
    hints: &ReleaseHints,
    preference: &[Region],
) -> ResolvedRelease {
    let selection = select_release(&candidate.release_dates, hints, preference);

    match selection {
        Some(Selection { tier, entry }) => {
            log::debug!(
                "Game {}: selected release {:?} via {} tier",
                candidate.id,
                entry,
                tier
            );
            ResolvedRelease {
                tier: Some(tier),
                release_date: entry.date.and_then(format_release_date).unwrap_or_default(),
                platform: platform_label(entry, &candidate.platforms),
                region: Region::label_for_code(entry.region).to_string(),
            }
        }
        None => {
            log::debug!(
                "Game {}: no dated release entry matched, using first release date",
                candidate.id
            );
            ResolvedRelease {
                tier: None,
                release_date: candidate
                    .first_release_date
                    .and_then(format_release_date)
                    .unwrap_or_default(),
                platform: String::new(),
                region: Region::Worldwide.name().to_string(),
            }
        }
    }
}

/// Convert epoch seconds to a UTC `YYYY-MM-DD` date. Returns `None` when the
/// timestamp is outside the representable range.
pub fn format_release_date(timestamp: i64) -> Option<String> {
    let date = DateTime::from_timestamp(timestamp, 0)?.date_naive();
    Some(format!(
        "{}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Name of the entry's platform from the game's platform list, or
/// `Platform #<id>` when the list doesn't cover it.
fn platform_label(entry: &ReleaseEntry, platforms: &[PlatformRef]) -> String {
    let Some(id) = entry.platform.as_deref() else {
        return String::new();
    };
    platforms
        .iter()
        .find(|p| p.id.as_deref() == Some(id))
        .and_then(|p| p.name.as_deref())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Platform #{}", id))
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
