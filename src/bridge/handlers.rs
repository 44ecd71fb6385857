use super::client::ModelBridge;
use super::protocol::{GenerateModelRequest, GenerateModelResponse};
use crate::error::ApiError;
use axum::{Extension, Json};
use std::sync::Arc;

/// Relays the request to the bridge. Bridge failures surface as 502/503.
pub async fn handle_generate_model<B: ModelBridge>(
    Extension(bridge): Extension<Arc<B>>,
    Json(req): Json<GenerateModelRequest>,
) -> Result<Json<GenerateModelResponse>, ApiError> {
    let response = bridge.generate(&req).await?;
    Ok(Json(response))
}
