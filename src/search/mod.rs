//! Address Resolution Module
//!
//! Resolves free-text addresses and building ids against the loaded dataset.
//!
//! ## Overview
//! The dataset is indexed once at startup into an immutable [`index::SearchIndex`].
//! Every query is a pure read over that index: the query text is normalized,
//! scored against each entry's precomputed normalized address, and the best
//! entries are returned.
//!
//! ## Submodules
//! - **`normalizer`**: Canonical text form used for comparison.
//! - **`similarity`**: Ratcliff/Obershelp similarity ratio.
//! - **`index`**: Index entries and the index builder.
//! - **`engine`**: Top-K ranking, exact id lookup and best-match lookup.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Building records, query errors and API DTOs.

pub mod engine;
pub mod handlers;
pub mod index;
pub mod normalizer;
pub mod similarity;
pub mod types;
