//! Error types for the word API.
//!
//! [`ApiError`] is the only place that maps failures to HTTP status codes.
//! Store errors pass through the service untouched and are categorized
//! here. Every variant renders as a JSON envelope:
//!
//! ```json
//! { "error": "<category>", "details": "<message>" }
//! ```

use axum::http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wordbank_store::StoreError;

/// Content type of error envelopes.
const ERROR_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Errors that can occur in the word API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be parsed.
    #[error("malformed request body: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// A successful result could not be serialized.
    #[error("response encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl ApiError {
    /// The status code and envelope category for this error.
    pub fn status_and_category(&self) -> (StatusCode, &'static str) {
        match self {
            Self::MalformedInput(_) => (StatusCode::BAD_REQUEST, "invalid json"),
            Self::Encoding(_) => (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode response"),
            Self::Store(store) => match store {
                StoreError::NotFound(_) => (StatusCode::BAD_REQUEST, "word not found"),
                StoreError::NoRecords => (StatusCode::BAD_REQUEST, "no words available"),
                StoreError::AlreadyExists(_) => (StatusCode::BAD_REQUEST, "word already exists"),
                StoreError::Backend(_) | StoreError::Migration(_) | StoreError::Config(_) => {
                    (StatusCode::BAD_REQUEST, "storage failure")
                }
                StoreError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category) = self.status_and_category();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": category,
            "details": self.to_string(),
        });

        (
            status,
            [
                (CONTENT_TYPE, ERROR_CONTENT_TYPE),
                (X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            body.to_string(),
        )
            .into_response()
    }
}
