use std::path::{Path, PathBuf};

use crate::error::CatalogError;

const ENV_CLIENT_ID: &str = "IGDB_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "IGDB_CLIENT_SECRET";

/// Twitch application credentials used to obtain an IGDB access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub client_id: CredentialSource,
    pub client_secret: CredentialSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    igdb: Option<IgdbConfig>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
struct IgdbConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file. Both fields are required.
    pub fn load() -> Result<Self, CatalogError> {
        let config = config_path().and_then(|p| read_config(&p));
        Self::resolve(
            std::env::var(ENV_CLIENT_ID).ok(),
            std::env::var(ENV_CLIENT_SECRET).ok(),
            config,
        )
    }

    /// Load credentials from a specific config file, ignoring the environment.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::resolve(None, None, read_config(path))
    }

    fn resolve(
        env_id: Option<String>,
        env_secret: Option<String>,
        config: Option<IgdbConfig>,
    ) -> Result<Self, CatalogError> {
        let client_id = env_id
            .filter(|v| !v.is_empty())
            .or_else(|| config.as_ref().and_then(|c| c.client_id.clone()))
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "Missing client_id. Set {} env var or add to config file",
                    ENV_CLIENT_ID
                ))
            })?;

        let client_secret = env_secret
            .filter(|v| !v.is_empty())
            .or_else(|| config.as_ref().and_then(|c| c.client_secret.clone()))
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "Missing client_secret. Set {} env var or add to config file",
                    ENV_CLIENT_SECRET
                ))
            })?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Replace loaded values with explicit ones (e.g., from CLI args).
    pub fn with_overrides(mut self, client_id: Option<String>, client_secret: Option<String>) -> Self {
        if let Some(id) = client_id {
            self.client_id = id;
        }
        if let Some(secret) = client_secret {
            self.client_secret = secret;
        }
        self
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-backlog").join("credentials.toml"))
}

/// Save credentials to the default config file. Returns the path written.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, CatalogError> {
    let path = config_path().ok_or_else(|| {
        CatalogError::Config("Could not determine config directory".to_string())
    })?;
    save_to_path(creds, &path)?;
    Ok(path)
}

/// Save credentials to `path`, creating parent directories as needed.
pub fn save_to_path(creds: &Credentials, path: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        igdb: Some(IgdbConfig {
            client_id: Some(creds.client_id.clone()),
            client_secret: Some(creds.client_secret.clone()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where each credential field is coming from.
pub fn credential_sources() -> CredentialSources {
    let config = config_path().and_then(|p| read_config(&p));

    let source = |var: &'static str, in_config: bool| {
        if std::env::var(var).is_ok_and(|v| !v.is_empty()) {
            CredentialSource::EnvVar(var)
        } else if in_config {
            CredentialSource::ConfigFile
        } else {
            CredentialSource::Missing
        }
    };

    CredentialSources {
        client_id: source(
            ENV_CLIENT_ID,
            config.as_ref().and_then(|c| c.client_id.as_ref()).is_some(),
        ),
        client_secret: source(
            ENV_CLIENT_SECRET,
            config.as_ref().and_then(|c| c.client_secret.as_ref()).is_some(),
        ),
    }
}

fn read_config(path: &Path) -> Option<IgdbConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = match toml::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            return None;
        }
    };
    config.igdb
}
