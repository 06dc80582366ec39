//! Error types for the cache front-ends
//!
//! The cache core never fails; these errors come from parsing commands,
//! validating requests, and I/O.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the command loop and the HTTP API.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Command name not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command line is missing a required argument
    #[error("Missing argument `{argument}` for {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Capacity is not a non-negative integer
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Command issued before the first BOUND constructed the cache
    #[error("Cache not initialised, {0} issued before BOUND")]
    Unbounded(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_)
            | CacheError::UnknownCommand(_)
            | CacheError::MissingArgument { .. }
            | CacheError::InvalidCapacity(_) => StatusCode::BAD_REQUEST,
            CacheError::Unbounded(_) => StatusCode::CONFLICT,
            CacheError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache front-ends.
pub type Result<T> = std::result::Result<T, CacheError>;
