use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Structured error body: every failure answers `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// REST-boundary error: a status code plus the wire message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Map domain errors to wire status codes and messages.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UserNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "User not found")
            }
            DomainError::FruitNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "Fruit not found")
            }
            DomainError::EmailAlreadyExists { .. } => {
                Self::new(StatusCode::CONFLICT, "User with this email already exists")
            }
            DomainError::FruitNameExists { .. } => {
                Self::new(StatusCode::CONFLICT, "Devil Fruit already exists")
            }
            DomainError::NotOwner { .. } => {
                Self::new(StatusCode::FORBIDDEN, "User not authorised to edit fruit")
            }
            DomainError::InvalidEmail { .. } => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            DomainError::Database { .. } => {
                // Log the internal error details but don't expose them to the client
                tracing::error!(error = ?e, "Database error occurred");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// The create endpoint predates the rest of the error surface and reports a
/// duplicate name as 400 rather than 409. Kept for wire compatibility.
pub fn map_create_fruit_error(e: DomainError) -> ApiError {
    match e {
        DomainError::FruitNameExists { .. } => {
            ApiError::new(StatusCode::BAD_REQUEST, "Devil Fruit already exists")
        }
        other => ApiError::from(other),
    }
}
