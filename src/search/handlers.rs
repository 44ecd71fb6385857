use super::engine::{ScoredEntry, find_best, find_by_id, rank};
use super::index::SearchIndex;
use super::types::{
    BuildingParams, BuildingResponse, HealthResponse, SearchMatchItem, SearchParams,
};
use crate::error::ApiError;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// Maximum number of hits returned by `/search`.
pub const SEARCH_RESULT_LIMIT: usize = 5;

pub async fn handle_health(Extension(index): Extension<Arc<SearchIndex>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        features: index.len(),
    })
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<SearchIndex>>,
) -> Result<Json<Vec<SearchMatchItem>>, ApiError> {
    let results: Vec<SearchMatchItem> = rank(&index, &params.query, SEARCH_RESULT_LIMIT)?
        .into_iter()
        .map(to_match_item)
        .collect();

    tracing::debug!("Search '{}' matched {} buildings", params.query, results.len());
    Ok(Json(results))
}

pub async fn handle_get_building(
    Query(params): Query<BuildingParams>,
    Extension(index): Extension<Arc<SearchIndex>>,
) -> Json<BuildingResponse> {
    let response = match find_by_id(&index, &params.id) {
        Some(record) => BuildingResponse::from_record(record),
        None => {
            tracing::debug!("Building {} not found", params.id);
            BuildingResponse::not_found(params.id)
        }
    };
    Json(response)
}

pub async fn handle_building_by_address(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<SearchIndex>>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let response = match find_best(&index, &params.query)? {
        Some(best) => {
            tracing::debug!(
                "Best match for '{}' is {} (score {:.3})",
                params.query,
                best.record().id,
                best.score
            );
            BuildingResponse::from_record(best.record())
        }
        None => BuildingResponse::not_found(params.query),
    };
    Ok(Json(response))
}

fn to_match_item(hit: ScoredEntry<'_>) -> SearchMatchItem {
    let record = hit.record();
    SearchMatchItem {
        id: record.id.clone(),
        score: hit.score,
        address: hit.entry.address.clone(),
        number: record.number.clone(),
        street: record.street.clone(),
        postcode: record.postcode.clone(),
        height_m: record.height_m,
        vacancy_pct: record.vacancy_pct,
    }
}
