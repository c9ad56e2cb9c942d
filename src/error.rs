//! Error types bridging domain failures to HTTP responses.
//!
//! [`EventError`] is the single error type flowing through the repository,
//! service, and handler layers. Its `IntoResponse` impl renders the JSON
//! error body `{ "status", "message", "timestamp" }` clients rely on.

use crate::model::EventId;
use crate::validation::FieldViolation;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Failure modes of the event service.
#[derive(Debug, Error)]
pub enum EventError {
    /// The referenced event does not exist.
    #[error("Event not found with id: {0}")]
    NotFound(EventId),

    /// One or more request fields failed their constraints.
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// The request body could not be parsed as an event request.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The underlying store failed. Details are logged, never sent to
    /// clients.
    #[error("Database error: {0}")]
    Database(String),
}

impl EventError {
    /// HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// HTTP status code, repeated in the body.
    status: u16,
    /// Human-readable error message.
    message: String,
    /// When the error was produced.
    timestamp: DateTime<Utc>,
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for EventError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
