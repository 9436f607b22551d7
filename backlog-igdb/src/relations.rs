//! Company, franchise and series names for a game.
//!
//! Each facet is one batch request over an id set. A facet whose lookup
//! fails comes back empty; it never fails the details request.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::future::Future;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::{Candidate, InvolvedCompany, NamedEntity};

/// One of the secondary relation lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Companies,
    Franchises,
    Series,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Companies => write!(f, "company"),
            Facet::Franchises => write!(f, "franchise"),
            Facet::Series => write!(f, "series"),
        }
    }
}

/// Names gathered from the three facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub franchises: Vec<String>,
    pub series: Vec<String>,
}

/// Developer and publisher names, each deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRoles {
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

/// Split involved companies into developers and publishers by their role
/// flags. A company flagged for both roles lands in both lists.
pub fn partition_companies(rows: &[InvolvedCompany]) -> CompanyRoles {
    let mut developers = Vec::new();
    let mut publishers = Vec::new();
    for row in rows {
        let Some(name) = row.company_name() else {
            continue;
        };
        if row.developer {
            developers.push(name);
        }
        if row.publisher {
            publishers.push(name);
        }
    }
    CompanyRoles {
        developers: dedup_names(developers),
        publishers: dedup_names(publishers),
    }
}

/// Remove repeated names, keeping the first occurrence of each.
pub fn dedup_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Non-empty names from a franchise or series lookup, in response order.
pub fn entity_names(rows: &[NamedEntity]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.name.as_deref())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// The game's primary franchise together with its other franchises.
pub fn franchise_ids(candidate: &Candidate) -> BTreeSet<u64> {
    candidate
        .franchise
        .into_iter()
        .chain(candidate.franchises.iter().copied())
        .collect()
}

/// The game's primary series together with its other series.
pub fn series_ids(candidate: &Candidate) -> BTreeSet<u64> {
    candidate
        .collection
        .into_iter()
        .chain(candidate.collections.iter().copied())
        .collect()
}

/// Run the three facet lookups concurrently and collect their names.
pub async fn aggregate_relations<C: Catalog>(catalog: &C, candidate: &Candidate) -> Relations {
    let company_ids: BTreeSet<u64> = candidate.involved_companies.iter().copied().collect();
    let franchise_ids = franchise_ids(candidate);
    let series_ids = series_ids(candidate);

    let (companies, franchises, series) = futures::join!(
        facet(Facet::Companies, &company_ids, |ids| catalog.involved_companies(ids)),
        facet(Facet::Franchises, &franchise_ids, |ids| catalog.franchises(ids)),
        facet(Facet::Series, &series_ids, |ids| catalog.collections(ids)),
    );

    let roles = partition_companies(&companies);
    Relations {
        developers: roles.developers,
        publishers: roles.publishers,
        franchises: entity_names(&franchises),
        series: entity_names(&series),
    }
}

/// Look up one facet, skipping the request for an empty id set and turning
/// a failed lookup into an empty result.
async fn facet<'a, T, F, Fut>(facet: Facet, ids: &'a BTreeSet<u64>, lookup: F) -> Vec<T>
where
    F: FnOnce(&'a BTreeSet<u64>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, CatalogError>>,
{
    if ids.is_empty() {
        return Vec::new();
    }
    match lookup(ids).await {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("Failed to fetch {} names for ids {:?}: {}", facet, ids, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/relations_tests.rs"]
mod tests;
