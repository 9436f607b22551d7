//! In-memory catalog used by the resolver and aggregator tests.

use std::collections::BTreeSet;
use std::sync::Mutex;

use backlog_core::CatalogId;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::{Candidate, InvolvedCompany, NamedEntity};

#[derive(Default)]
pub(crate) struct MockCatalog {
    pub game: Option<Candidate>,
    pub companies: Vec<InvolvedCompany>,
    pub franchises: Vec<NamedEntity>,
    pub collections: Vec<NamedEntity>,
    pub fail_game: bool,
    pub fail_companies: bool,
    pub fail_franchises: bool,
    pub fail_collections: bool,
    /// Every request made, as `endpoint:ids`.
    pub calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn with_game(game: Candidate) -> Self {
        Self {
            game: Some(game),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &str, ids: &BTreeSet<u64>) {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", endpoint, ids.join(",")));
    }

    /// Only rows whose id was asked for, like the real `where id = (...)`.
    fn filtered<T: Clone>(rows: &[T], ids: &BTreeSet<u64>, id_of: fn(&T) -> u64) -> Vec<T> {
        rows.iter().filter(|r| ids.contains(&id_of(r))).cloned().collect()
    }
}

pub(crate) fn named(id: u64, name: &str) -> NamedEntity {
    NamedEntity {
        id,
        name: Some(name.to_string()),
    }
}

pub(crate) fn company(id: u64, name: &str, developer: bool, publisher: bool) -> InvolvedCompany {
    InvolvedCompany {
        id,
        company: Some(named(id * 10, name)),
        developer,
        publisher,
    }
}

fn boom() -> CatalogError {
    CatalogError::ServerError {
        status: 503,
        message: "unavailable".to_string(),
    }
}

impl Catalog for MockCatalog {
    async fn game(&self, id: &CatalogId) -> Result<Candidate, CatalogError> {
        self.calls.lock().unwrap().push(format!("games:{}", id));
        if self.fail_game {
            return Err(boom());
        }
        self.game
            .clone()
            .filter(|g| g.id.to_string() == id.as_str())
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    async fn involved_companies(
        &self,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<InvolvedCompany>, CatalogError> {
        self.record("involved_companies", ids);
        if self.fail_companies {
            return Err(boom());
        }
        Ok(Self::filtered(&self.companies, ids, |c| c.id))
    }

    async fn franchises(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError> {
        self.record("franchises", ids);
        if self.fail_franchises {
            return Err(boom());
        }
        Ok(Self::filtered(&self.franchises, ids, |f| f.id))
    }

    async fn collections(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError> {
        self.record("collections", ids);
        if self.fail_collections {
            return Err(boom());
        }
        Ok(Self::filtered(&self.collections, ids, |c| c.id))
    }
}
