use super::normalizer::join_address_parts;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A building loaded from the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRecord {
    pub id: String,
    pub number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub height_m: Option<f64>,
    pub vacancy_pct: Option<f64>,
    /// Every attribute of the source feature, verbatim.
    pub properties: Map<String, Value>,
    /// Opaque geometry payload, never interpreted.
    pub geometry: Value,
}

impl BuildingRecord {
    /// A record carrying only an id and address parts; used by tests and tooling.
    pub fn with_address(
        id: impl Into<String>,
        number: Option<&str>,
        street: Option<&str>,
        postcode: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.map(str::to_string),
            street: street.map(str::to_string),
            postcode: postcode.map(str::to_string),
            height_m: None,
            vacancy_pct: None,
            properties: Map::new(),
            geometry: Value::Null,
        }
    }

    /// "number street postcode", skipping blank parts.
    pub fn formatted_address(&self) -> String {
        join_address_parts([
            self.number.as_deref(),
            self.street.as_deref(),
            self.postcode.as_deref(),
        ])
    }
}

/// Errors surfaced by the query operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Query cannot be empty")]
    InvalidQuery,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildingParams {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub features: usize,
}

/// One ranked hit as returned by `/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatchItem {
    pub id: String,
    pub score: f64,
    pub address: String,
    pub number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub height_m: Option<f64>,
    pub vacancy_pct: Option<f64>,
}

/// Payload of `/building` and `/building_by_address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildingResponse {
    Found(FoundBuilding),
    /// Serializes as `{"found": false, "id": ...}` only.
    Missing(MissingBuilding),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundBuilding {
    pub found: bool,
    pub id: String,
    pub address: String,
    pub height_m: Option<f64>,
    pub vacancy_pct: Option<f64>,
    pub properties: Map<String, Value>,
    pub geometry: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingBuilding {
    pub found: bool,
    pub id: String,
}

impl BuildingResponse {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::Missing(MissingBuilding {
            found: false,
            id: id.into(),
        })
    }

    pub fn from_record(record: &BuildingRecord) -> Self {
        Self::Found(FoundBuilding {
            found: true,
            id: record.id.clone(),
            address: record.formatted_address(),
            height_m: record.height_m,
            vacancy_pct: record.vacancy_pct,
            properties: record.properties.clone(),
            geometry: record.geometry.clone(),
        })
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Found(building) => &building.id,
            Self::Missing(missing) => &missing.id,
        }
    }
}
