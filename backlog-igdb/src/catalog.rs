use std::collections::BTreeSet;

use backlog_core::CatalogId;

use crate::error::CatalogError;
use crate::types::{Candidate, InvolvedCompany, NamedEntity};

/// Fields requested for a single game when resolving its details.
pub const GAME_FIELDS: &[&str] = &[
    "name",
    "franchise",
    "franchises",
    "collection",
    "collections",
    "platforms.id",
    "platforms.name",
    "first_release_date",
    "release_dates.platform",
    "release_dates.region",
    "release_dates.date",
    "involved_companies",
];

/// Fields requested for each involved-company row.
pub const COMPANY_FIELDS: &[&str] = &["company.name", "developer", "publisher"];

/// The catalog lookups the details resolver depends on.
///
/// Each batch method issues exactly one request for the whole id set.
/// Implemented by [`crate::IgdbClient`]; tests provide in-memory versions.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Fetch one game. Fails with [`CatalogError::NotFound`] when the catalog
    /// has no record for `id`.
    async fn game(&self, id: &CatalogId) -> Result<Candidate, CatalogError>;

    async fn involved_companies(
        &self,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<InvolvedCompany>, CatalogError>;

    async fn franchises(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError>;

    /// Series lookup, backed by IGDB's `collections` endpoint.
    async fn collections(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError>;
}
