pub mod browse;
pub mod catalog;
pub mod client;
pub mod credentials;
pub mod details;
pub mod error;
pub mod query;
pub mod relations;
pub mod resolve;
pub mod types;

#[cfg(test)]
#[path = "tests/mock_catalog.rs"]
mod mock_catalog;

pub use browse::{DEFAULT_SEARCH_LIMIT, POPULAR_LIMIT, popular_games, search_games};
pub use catalog::Catalog;
pub use client::IgdbClient;
pub use credentials::{
    CredentialSource, CredentialSources, Credentials, config_path, credential_sources,
    save_to_file, save_to_path,
};
pub use details::{ResolvedMetadata, fetch_game_details, resolve_candidate};
pub use error::CatalogError;
pub use relations::{Relations, aggregate_relations};
pub use resolve::{ReleaseHints, ResolveTier, ResolvedRelease, resolve_release, select_release};
pub use types::{COVER_BIG, COVER_THUMB, Candidate, Cover, GameSummary, ReleaseEntry};
