use std::collections::BTreeSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use backlog_core::CatalogId;

use crate::catalog::{COMPANY_FIELDS, Catalog, GAME_FIELDS};
use crate::credentials::Credentials;
use crate::error::CatalogError;
use crate::query::Query;
use crate::types::{Candidate, InvolvedCompany, NamedEntity, TokenResponse};

const API_URL: &str = "https://api.igdb.com/v4";
const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
/// IGDB allows four requests per second per client.
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(250);
/// Refresh the token this long before Twitch says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_MARGIN < self.expires_at
    }
}

/// HTTP client for the IGDB v4 API with token caching and request spacing.
pub struct IgdbClient {
    http: reqwest::Client,
    creds: Credentials,
    token: Arc<Mutex<Option<AccessToken>>>,
    last_request: Arc<Mutex<Instant>>,
}

impl IgdbClient {
    /// Create a new client and validate the credentials by obtaining an
    /// access token.
    pub async fn new(creds: Credentials) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let now = Instant::now();
        let client = Self {
            http,
            creds,
            token: Arc::new(Mutex::new(None)),
            last_request: Arc::new(Mutex::new(
                now.checked_sub(MIN_REQUEST_INTERVAL).unwrap_or(now),
            )),
        };

        client.access_token().await?;
        Ok(client)
    }

    /// Create a client from credentials found in the environment or config file.
    pub async fn from_env() -> Result<Self, CatalogError> {
        Self::new(Credentials::load()?).await
    }

    /// Seconds until the cached token expires, if one is held.
    pub async fn token_expires_in(&self) -> Option<u64> {
        let token = self.token.lock().await;
        token
            .as_ref()
            .map(|t| t.expires_at.saturating_duration_since(Instant::now()).as_secs())
    }

    /// Return a valid bearer token, requesting a new one when the cached
    /// token is missing or about to expire.
    async fn access_token(&self) -> Result<String, CatalogError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        log::debug!("Requesting IGDB access token");
        let resp = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.creds.client_id.as_str()),
                ("client_secret", self.creds.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(CatalogError::InvalidCredentials(
                "Twitch rejected the client id or secret".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!("Failed to parse token response: {e}"))
        })?;
        let lifetime = parsed
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);

        let token = AccessToken {
            value: parsed.access_token,
            expires_at: Instant::now() + lifetime,
        };
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// Run a query against an IGDB endpoint (e.g. `games`, `franchises`)
    /// and decode the JSON array it returns.
    pub async fn query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<Vec<T>, CatalogError> {
        let token = self.access_token().await?;
        let body = query.to_string();
        log::debug!("POST /{}: {}", endpoint, body);

        self.rate_limit().await;

        let resp = self
            .http
            .post(format!("{}/{}", API_URL, endpoint))
            .header("Client-ID", &self.creds.client_id)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            // Drop the token so the next call fetches a fresh one.
            *self.token.lock().await = None;
            return Err(CatalogError::InvalidCredentials(
                "Access token rejected".to_string(),
            ));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimit);
        }
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse /{} response: {e}. Response: {}",
                endpoint,
                snippet(&text)
            ))
        })
    }

    /// Enforce request spacing: wait until at least MIN_REQUEST_INTERVAL has
    /// passed since the last API request.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < MIN_REQUEST_INTERVAL {
            tokio::time::sleep(MIN_REQUEST_INTERVAL - elapsed).await;
        }
        *last = Instant::now();
    }
}

impl Catalog for IgdbClient {
    async fn game(&self, id: &CatalogId) -> Result<Candidate, CatalogError> {
        let query = Query::new().fields(GAME_FIELDS).where_id(id);
        let games: Vec<Candidate> = self.query("games", &query).await?;
        games.into_iter().next().ok_or_else(|| CatalogError::NotFound {
            id: id.to_string(),
        })
    }

    async fn involved_companies(
        &self,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<InvolvedCompany>, CatalogError> {
        let query = Query::new().fields(COMPANY_FIELDS).where_ids(ids);
        self.query("involved_companies", &query).await
    }

    async fn franchises(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError> {
        let query = Query::new().fields(&["name"]).where_ids(ids);
        self.query("franchises", &query).await
    }

    async fn collections(&self, ids: &BTreeSet<u64>) -> Result<Vec<NamedEntity>, CatalogError> {
        let query = Query::new().fields(&["name"]).where_ids(ids);
        self.query("collections", &query).await
    }
}

/// First 200 characters of a response body, for error messages.
fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let text = "é".repeat(300);
        assert_eq!(snippet(&text).chars().count(), 200);
        assert_eq!(snippet("short"), "short");
    }

    #[tokio::test]
    async fn token_freshness_respects_margin() {
        let fresh = AccessToken {
            value: "t".into(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        let stale = AccessToken {
            value: "t".into(),
            expires_at: Instant::now() + Duration::from_secs(30),
        };
        assert!(fresh.is_fresh());
        assert!(!stale.is_fresh());
    }
}
