//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant produces a JSON body `{"error": "message"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AssistError;

/// Application-level error type that implements `IntoResponse`.
///
/// - `BadRequest` → 400
/// - `ServiceUnavailable` → 503 (no usable index)
/// - `BadGateway` → 502 (the language model step failed)
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ServiceUnavailable(String),
    BadGateway(String),
}

impl From<AssistError> for ApiError {
    fn from(err: AssistError) -> Self {
        match err {
            AssistError::EmptyQuestion => Self::BadRequest(err.to_string()),
            AssistError::Retrieval(_) => {
                tracing::error!("{}", err);
                Self::ServiceUnavailable(err.to_string())
            }
            AssistError::Generation(_) => {
                tracing::error!("{}", err);
                Self::BadGateway(err.to_string())
            }
        }
    }
}

/// Malformed bodies and missing fields answer with the same JSON error shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use vitrine_search::SearchError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AssistError::EmptyQuestion, StatusCode::BAD_REQUEST),
            (
                AssistError::Retrieval(SearchError::IndexNotBuilt),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AssistError::Generation(GenerationError::RateLimited {
                    provider: "OpenAI".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
