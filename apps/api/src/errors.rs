use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The four analysis failures (`Validation`, `Provider`, `MalformedPayload`,
/// `Schema`) are each terminal for the `analyze` call that raised them —
/// none is ever downgraded to a partial or default result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller error — e.g. empty or whitespace-only resume text. Rejected
    /// before any provider call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The analysis provider could not be reached or returned an error.
    /// Recoverable by issuing a fresh analyze call; never retried internally.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider output was not parseable as structured data at all.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Provider output parsed but violates the result schema. Names the
    /// first offending field (fail fast, fail closed).
    #[error("Schema validation failed at `{field}`: {reason}")]
    Schema { field: String, reason: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "The analysis provider could not complete the request".to_string(),
                )
            }
            AppError::MalformedPayload(msg) => {
                tracing::error!("Malformed provider payload: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_PAYLOAD",
                    "The analysis provider returned unparseable output".to_string(),
                )
            }
            AppError::Schema { field, reason } => {
                tracing::error!("Schema validation failed at `{field}`: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VALIDATION_ERROR",
                    format!("Provider output violated the result schema at `{field}`"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
