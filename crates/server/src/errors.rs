use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every handler: `{"error": <title>, "detail": <text>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: impl Into<String>) -> Self {
        Self { status, error, detail: detail.into() }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", detail)
    }

    /// Malformed body. Keeps axum's status (422 bad fields, 400 bad JSON, 415 wrong content type).
    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "Validation Error", rejection.body_text())
    }

    pub fn from_query_rejection(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }

    /// Client errors keep their message; store failures are logged and
    /// answered with a generic detail.
    pub fn from_service(title: &'static str, e: ServiceError) -> Self {
        if e.is_client_error() {
            return Self::validation(e.to_string());
        }
        error!(error = %e, title, "storage operation failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, title, "internal server error")
    }

    /// Like `from_service`, but a store failure exposes the raw driver message.
    pub fn from_service_verbose(title: &'static str, e: ServiceError) -> Self {
        if e.is_client_error() {
            return Self::validation(e.to_string());
        }
        error!(error = %e, title, "storage operation failed");
        let detail = match e {
            ServiceError::Db(msg) => msg,
            other => other.to_string(),
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, title, detail)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
