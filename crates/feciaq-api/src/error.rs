//! Feciaq API — error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use feciaq_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned for every failure below the validation boundary.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Trace exporter setup failed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable messages, in the order they were detected.
    pub errors: Vec<String>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation(format!(
            "malformed request body: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self.0 {
            DomainError::ValidationFailed(messages) => (StatusCode::BAD_REQUEST, messages),
            DomainError::InternalFailure(detail) => {
                error!(%detail, "request failed below the validation boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![INTERNAL_ERROR_MESSAGE.to_owned()],
                )
            }
        };

        (status, Json(ErrorBody { errors })).into_response()
    }
}
