use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Display label for a resource, derived from the keyword that found it.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    Seed,
    Fertilizer,
    AgriStore,
}

impl ResourceCategory {
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if keyword.contains("seed") {
            ResourceCategory::Seed
        } else if keyword.contains("fertilizer") || keyword.contains("fertiliser") {
            ResourceCategory::Fertilizer
        } else {
            ResourceCategory::AgriStore
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedResource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    pub distance_km: f64,
    pub rating: Option<f64>,
    pub directions_url: String,
}
