//! Building Address Search Library
//!
//! This library crate defines the modules behind the building search API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`search`**: The address resolution engine. Normalizes text, builds the
//!   immutable search index, scores addresses with the Ratcliff/Obershelp ratio,
//!   and answers ranking, id and best-match queries.
//! - **`dataset`**: Loads the GeoJSON building dataset and validates it into typed records.
//! - **`bridge`**: Client for the external model generation service.
//! - **`config`**: Command line and environment configuration.
//! - **`error`**: Maps error kinds to HTTP responses.

pub mod bridge;
pub mod config;
pub mod dataset;
pub mod error;
pub mod search;
