//! API error types with IntoResponse
//!
//! The routing miss is the only failure deliberately shaped into a
//! response. Body decode and database failures are logged and surface as
//! a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::DbError;

use super::response::json_response;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No handler for the (method, action) pair (404)
    NotFound,

    /// Request body missing a required field or not valid JSON (500, logged)
    Payload(serde_json::Error),

    /// Database or connection-string failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => json_response(StatusCode::NOT_FOUND, &json!({"error": "Not found"})),
            Self::Payload(e) => {
                tracing::error!("request body rejected: {}", e);
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({"error": "Internal server error"}),
                )
            }
            Self::Database(e) => {
                tracing::error!("database error: {}", e);
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({"error": "Internal server error"}),
                )
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
