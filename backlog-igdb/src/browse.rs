//! Catalog browsing: title search and the top-rated listing.

use crate::client::IgdbClient;
use crate::error::CatalogError;
use crate::query::Query;
use crate::types::GameSummary;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const POPULAR_LIMIT: usize = 30;

/// Query for a title search page.
pub fn search_query(term: &str, limit: usize, offset: usize) -> Result<Query, CatalogError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(CatalogError::Config("Missing search query".to_string()));
    }
    Ok(Query::new()
        .search(term)
        .fields(&["name", "cover.url"])
        .limit(limit)
        .offset(offset))
}

/// Query for the highest-rated games.
pub fn popular_query(limit: usize) -> Query {
    Query::new()
        .fields(&["name", "cover.url", "total_rating"])
        .sort_desc("total_rating")
        .limit(limit)
}

/// Search the catalog by title.
pub async fn search_games(
    client: &IgdbClient,
    term: &str,
    limit: usize,
    offset: usize,
) -> Result<Vec<GameSummary>, CatalogError> {
    log::debug!("Searching for {:?} (limit {}, offset {})", term, limit, offset);
    let query = search_query(term, limit, offset)?;
    client.query("games", &query).await
}

/// Fetch the highest-rated games.
pub async fn popular_games(client: &IgdbClient, limit: usize) -> Result<Vec<GameSummary>, CatalogError> {
    client.query("games", &popular_query(limit)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_body() {
        let q = search_query("  zelda ", DEFAULT_SEARCH_LIMIT, 0).unwrap();
        assert_eq!(
            q.to_string(),
            r#"search "zelda"; fields name, cover.url; limit 10; offset 0;"#
        );
    }

    #[test]
    fn blank_search_is_rejected() {
        assert!(matches!(search_query("   ", 10, 0), Err(CatalogError::Config(_))));
    }

    #[test]
    fn popular_query_body() {
        assert_eq!(
            popular_query(POPULAR_LIMIT).to_string(),
            "fields name, cover.url, total_rating; sort total_rating desc; limit 30;"
        );
    }
}
