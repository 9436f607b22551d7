//! Game details lookup: fetch one game, resolve its release and relations,
//! and merge them into the record the collection editor autofills from.

use serde::{Deserialize, Serialize};

use backlog_core::{CatalogId, REGION_PREFERENCE, Region};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::relations::{Relations, aggregate_relations};
use crate::resolve::{ReleaseHints, ResolvedRelease, resolve_release};
use crate::types::Candidate;

/// Autofill metadata for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    pub title: String,
    pub platform: String,
    pub region: String,
    /// `YYYY-MM-DD`, or empty.
    pub release_date: String,
    pub publisher: Vec<String>,
    pub developer: Vec<String>,
    pub franchise: Vec<String>,
    pub series: Vec<String>,
}

impl ResolvedMetadata {
    /// Combine the release pick and the relation names for `candidate`.
    pub fn merge(candidate: &Candidate, release: ResolvedRelease, relations: Relations) -> Self {
        Self {
            title: candidate.name.clone().unwrap_or_default(),
            platform: release.platform,
            region: release.region,
            release_date: release.release_date,
            publisher: relations.publishers,
            developer: relations.developers,
            franchise: relations.franchises,
            series: relations.series,
        }
    }

    /// True when every field is blank, as returned for a malformed id.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Look up details for the game with catalog id `raw_id`.
///
/// A malformed id (anything but ASCII digits) yields a blank record without
/// contacting the catalog. Failing to fetch the game itself is an error;
/// failing to fetch its companies, franchises or series only empties those
/// lists.
pub async fn fetch_game_details<C: Catalog>(
    catalog: &C,
    raw_id: &str,
    hints: &ReleaseHints,
) -> Result<ResolvedMetadata, CatalogError> {
    let Some(id) = CatalogId::parse(raw_id) else {
        log::debug!("Ignoring malformed game id {:?}", raw_id);
        return Ok(ResolvedMetadata::default());
    };

    let candidate = catalog.game(&id).await?;
    Ok(resolve_candidate(catalog, &candidate, hints, &REGION_PREFERENCE).await)
}

/// Resolve an already-fetched game. The release pick and the three relation
/// lookups run concurrently and are joined before the record is built.
pub async fn resolve_candidate<C: Catalog>(
    catalog: &C,
    candidate: &Candidate,
    hints: &ReleaseHints,
    preference: &[Region],
) -> ResolvedMetadata {
    let (release, relations) = futures::join!(
        async { resolve_release(candidate, hints, preference) },
        aggregate_relations(catalog, candidate),
    );
    ResolvedMetadata::merge(candidate, release, relations)
}

#[cfg(test)]
#[path = "tests/details_tests.rs"]
mod tests;
