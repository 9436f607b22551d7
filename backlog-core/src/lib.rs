//! Shared vocabulary for the game backlog: catalog ids and release regions.

pub mod id;
pub mod region;

pub use id::{CatalogId, deserialize_platform_id, normalize_platform_id};
pub use region::{REGION_PREFERENCE, Region, RegionParseError, UNKNOWN_REGION_LABEL};
