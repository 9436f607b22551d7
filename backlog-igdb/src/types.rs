use serde::{Deserialize, Serialize};

use backlog_core::deserialize_platform_id;

/// One game record from the `games` endpoint, with the fields the details
/// lookup asks for. IGDB omits absent fields, so everything is optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Candidate {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Earliest release across all platforms, seconds since the epoch.
    #[serde(default)]
    pub first_release_date: Option<i64>,
    #[serde(default)]
    pub platforms: Vec<PlatformRef>,
    #[serde(default)]
    pub franchise: Option<u64>,
    #[serde(default)]
    pub franchises: Vec<u64>,
    /// Primary series, called "collection" by IGDB.
    #[serde(default)]
    pub collection: Option<u64>,
    #[serde(default)]
    pub collections: Vec<u64>,
    #[serde(default)]
    pub involved_companies: Vec<u64>,
    #[serde(default)]
    pub release_dates: Vec<ReleaseEntry>,
}

/// A platform the game was released on, expanded from `platforms.id,name`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PlatformRef {
    #[serde(default, deserialize_with = "deserialize_platform_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One regional release of a game on one platform.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ReleaseEntry {
    #[serde(default, deserialize_with = "deserialize_platform_id")]
    pub platform: Option<String>,
    #[serde(default)]
    pub region: Option<u32>,
    /// Release timestamp, seconds since the epoch.
    #[serde(default)]
    pub date: Option<i64>,
}

/// A row from `involved_companies` with the company name expanded.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct InvolvedCompany {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub company: Option<NamedEntity>,
    #[serde(default)]
    pub developer: bool,
    #[serde(default)]
    pub publisher: bool,
}

impl InvolvedCompany {
    /// The company's name, if the catalog supplied a non-empty one.
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|n| !n.is_empty())
    }
}

/// Any `{id, name}` record: companies, franchises, collections.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NamedEntity {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Game listing row used by search and the popular-games browse.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GameSummary {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub total_rating: Option<f64>,
}

/// Cover art reference. IGDB hands back protocol-relative thumbnail URLs
/// such as `//images.igdb.com/igdb/image/upload/t_thumb/co1abc.jpg`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Cover {
    #[serde(default)]
    pub url: Option<String>,
}

/// Image size presets understood by the IGDB image CDN.
pub const COVER_THUMB: &str = "t_thumb";
pub const COVER_BIG: &str = "t_cover_big";

impl Cover {
    /// Absolute `https:` URL for this cover at the given size preset.
    pub fn url_for_size(&self, size: &str) -> Option<String> {
        let url = self.url.as_deref().filter(|u| !u.is_empty())?;
        let sized = url.replacen(COVER_THUMB, size, 1);
        if sized.starts_with("//") {
            Some(format!("https:{}", sized))
        } else {
            Some(sized)
        }
    }
}

/// Response from the Twitch client-credentials token endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
