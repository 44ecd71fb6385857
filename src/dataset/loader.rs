use super::types::{
    DatasetError, Feature, FeatureCollection, PROP_HEIGHT, PROP_ID, PROP_NUMBER, PROP_POSTCODE,
    PROP_STREET, PROP_VACANCY,
};
use crate::search::types::BuildingRecord;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Reads the dataset file and validates every feature.
///
/// Features without an id are skipped with a warning; every other feature is
/// kept in file order, duplicates included.
pub async fn load_dataset(path: &Path) -> Result<Vec<BuildingRecord>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    let records = parse_dataset(&raw)
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

    tracing::info!("Loaded {} buildings from {}", records.len(), path.display());
    Ok(records)
}

/// Parses a GeoJSON FeatureCollection into building records.
pub fn parse_dataset(raw: &[u8]) -> Result<Vec<BuildingRecord>> {
    let collection: FeatureCollection = serde_json::from_slice(raw)?;

    let total = collection.features.len();
    let mut records = Vec::with_capacity(total);
    for (position, feature) in collection.features.into_iter().enumerate() {
        match record_from_feature(position, feature) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping feature: {}", e),
        }
    }

    if records.len() < total {
        tracing::warn!(
            "Skipped {} of {} features without an id",
            total - records.len(),
            total
        );
    }
    Ok(records)
}

/// Validates one feature. `position` is only used for error reporting.
pub fn record_from_feature(
    position: usize,
    feature: Feature,
) -> Result<BuildingRecord, DatasetError> {
    let properties = feature.properties.unwrap_or_default();

    let id = text_property(&properties, PROP_ID)
        .filter(|id| !id.is_empty())
        .ok_or(DatasetError::MissingId { position })?;

    Ok(BuildingRecord {
        id,
        number: text_property(&properties, PROP_NUMBER),
        street: text_property(&properties, PROP_STREET),
        postcode: text_property(&properties, PROP_POSTCODE),
        height_m: numeric_property(&properties, PROP_HEIGHT),
        vacancy_pct: numeric_property(&properties, PROP_VACANCY),
        properties,
        geometry: feature.geometry,
    })
}

/// Strings verbatim; numbers and booleans rendered as text; anything else absent.
fn text_property(properties: &Map<String, Value>, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// JSON numbers, or strings that parse as one.
fn numeric_property(properties: &Map<String, Value>, key: &str) -> Option<f64> {
    match properties.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
