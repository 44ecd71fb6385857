//! Dataset File Types
//!
//! Mirrors the GeoJSON layout of the dataset file. Only the parts the service
//! needs are typed; everything else is carried as raw JSON.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Property holding the building identifier.
pub const PROP_ID: &str = "id";
pub const PROP_NUMBER: &str = "number";
pub const PROP_STREET: &str = "street";
pub const PROP_POSTCODE: &str = "postcode";
pub const PROP_HEIGHT: &str = "height";
pub const PROP_VACANCY: &str = "Percentage_vacant";

/// Top-level dataset document. A missing `features` key means no buildings.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Value,
}

/// Why a single feature could not become a building record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("feature #{position} has no usable id")]
    MissingId { position: usize },
}
