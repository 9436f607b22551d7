/// Errors that can occur while talking to the IGDB catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited by IGDB API")]
    RateLimit,

    #[error("Game {id} not found in IGDB")]
    NotFound { id: String },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for failures that mean the catalog could not be reached or
    /// refused us, as opposed to answering with no data.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::RateLimit
                | Self::InvalidCredentials(_)
                | Self::ServerError { .. }
        )
    }
}
