//! Error types for the breed explorer service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;

// == App Error Enum ==
/// Unified error type for the service layer and HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid request data
    #[error("{0}")]
    Validation(String),

    /// Favorite already present
    #[error("{0}")]
    Conflict(String),

    /// Favorite not present
    #[error("{0}")]
    NotFound(String),

    /// Breed provider failed or timed out
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Favorites file could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Favorites file holds malformed JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                json!({ "error": "Breed already in favorites", "message": msg }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Breed not found in favorites", "message": msg }),
            ),
            AppError::Upstream(err) => {
                error!("Upstream failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Upstream service failure", "message": err.short_message() }),
                )
            }
            AppError::Storage(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                error!("Internal failure: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
