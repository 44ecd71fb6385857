//! Dataset Loading Module
//!
//! Reads the building dataset (a GeoJSON FeatureCollection) once at startup
//! and validates each feature into a typed [`BuildingRecord`].
//!
//! ## Workflow
//! 1. **Read**: Loads and parses the dataset file.
//! 2. **Validate**: Converts loosely-typed feature properties into explicit optional fields.
//! 3. **Hand-off**: The records are passed to the search index builder.
//!
//! [`BuildingRecord`]: crate::search::types::BuildingRecord

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
