//! HTTP error mapping.
//!
//! Core and collaborator errors stay transport-agnostic; this is the only
//! place they are turned into status codes.

use crate::bridge::client::BridgeError;
use crate::search::types::SearchError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Search(SearchError::InvalidQuery) => StatusCode::BAD_REQUEST,
            ApiError::Bridge(BridgeError::Unavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Bridge(BridgeError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Rejected request with {}: {}", status, self);
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
