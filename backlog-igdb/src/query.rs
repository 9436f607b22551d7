//! Builder for IGDB query bodies (the "Apicalypse" text syntax).
//!
//! Every IGDB endpoint takes a plain-text POST body made of `;`-terminated
//! clauses, e.g. `fields name; where id = (1,2); limit 2;`.

use std::fmt;

/// Largest `limit` IGDB accepts on a single request.
pub const MAX_LIMIT: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search: Option<String>,
    fields: Vec<String>,
    filter: Option<String>,
    sort: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Full-text search. Quotes and backslashes in `term` are escaped.
    pub fn search(mut self, term: &str) -> Self {
        let escaped = term.replace('\\', "\\\\").replace('"', "\\\"");
        self.search = Some(escaped);
        self
    }

    /// Restrict to a single id.
    pub fn where_id(mut self, id: impl fmt::Display) -> Self {
        self.filter = Some(format!("id = {}", id));
        self
    }

    /// Restrict to a set of ids in one request. The limit is raised to cover
    /// the whole set so the default page size doesn't truncate the batch.
    pub fn where_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
        self.limit = Some(ids.len().clamp(1, MAX_LIMIT));
        self.filter = Some(format!("id = ({})", ids.join(",")));
        self
    }

    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort = Some(format!("{} desc", field));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.min(MAX_LIMIT));
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = Vec::new();
        if let Some(term) = &self.search {
            clauses.push(format!("search \"{}\";", term));
        }
        if !self.fields.is_empty() {
            clauses.push(format!("fields {};", self.fields.join(", ")));
        }
        if let Some(filter) = &self.filter {
            clauses.push(format!("where {};", filter));
        }
        if let Some(sort) = &self.sort {
            clauses.push(format!("sort {};", sort));
        }
        if let Some(limit) = self.limit {
            clauses.push(format!("limit {};", limit));
        }
        if let Some(offset) = self.offset {
            clauses.push(format!("offset {};", offset));
        }
        write!(f, "{}", clauses.join(" "))
    }
}
