//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the dashboard read endpoints.
///
/// The profile-summary endpoints never return these; their contract is to
/// answer 200 for any input.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown {kind}: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid value for query parameter {param}: {value}")]
    InvalidQuery { param: &'static str, value: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::NotFound {
            kind: "conversation",
            id: "abc".to_string(),
        };
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let bad_query = ApiError::InvalidQuery {
            param: "channel",
            value: "fax".to_string(),
        };
        assert_eq!(bad_query.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
