//! Bridge Protocol
//!
//! Data Transfer Objects exchanged with the bridge service. The same request
//! body is accepted from clients on `/generate_model` and forwarded unchanged.

use serde::{Deserialize, Serialize};

/// Path the bridge service serves generation requests on.
pub const ENDPOINT_GENERATE: &str = "/generate";

/// A request to generate a model for one building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateModelRequest {
    pub building_id: String,
    /// Footprint polygon as `[longitude, latitude]` pairs.
    pub footprint_lonlat: Vec<Vec<f64>>,
    pub height_m: f64,
    #[serde(default)]
    pub stories: Option<u32>,
    #[serde(default)]
    pub vacancy_pct: Option<f64>,
    /// Client-supplied timestamp, passed through untouched.
    pub timestamp: String,
}

/// The bridge's answer once the model has been written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateModelResponse {
    pub ok: bool,
    pub building_id: String,
    /// Where the generated model can be downloaded from.
    pub model_url: String,
    pub generated_at: String,
    pub notes: String,
}
