//! Catalog identifiers.
//!
//! Ids reach us from user input (search boxes, CLI args) and from catalog
//! JSON, where the same platform id can show up as `6` or `"6"`. Everything
//! that compares ids goes through the canonical text forms defined here.

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entity id that has passed the digit-only check.
///
/// Kept as text so arbitrarily long user input never overflows; the catalog
/// simply reports no match for ids it doesn't know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CatalogId(String);

impl CatalogId {
    /// Validate `raw` as a catalog id. Returns `None` unless it is one or
    /// more ASCII digits with nothing else around it.
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical text form of a platform id.
///
/// Surrounding whitespace is dropped and purely numeric ids lose leading
/// zeros, so `" 06"`, `"6"` and the JSON number `6` all compare equal.
pub fn normalize_platform_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = trimmed.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    } else {
        trimmed.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

/// Serde helper: accept a platform id encoded as either a JSON number or a
/// string and store its canonical text form.
pub fn deserialize_platform_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let text = match v {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => normalize_platform_id(&s),
        };
        if text.is_empty() { None } else { Some(text) }
    }))
}
