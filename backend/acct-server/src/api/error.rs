//! REST API error types
//!
//! Every failure renders as `{ "error": { "code", "message", "field"? } }`.

use acct_auth::AuthError;
use acct_session::SessionError;

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, invalid or replayed credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Username or email already taken (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Auth rate limit hit (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ApiErrorBody) {
        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message, None),
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Conflict { message, .. } => (StatusCode::CONFLICT, "CONFLICT", message, None),
            ApiError::TooManyRequests { message, .. } => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED", message, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        (
            status,
            ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal { .. }) {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let (status, body) = self.status_and_body();

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert session errors to API errors
impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            SessionError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            SessionError::Conflict { message, .. } => ApiError::Conflict { message, location },
            SessionError::NotFound { message, .. } => ApiError::NotFound { message, location },
            SessionError::Unauthorized { message, .. } => {
                ApiError::Unauthorized { message, location }
            }
            SessionError::Internal { message, .. } => {
                // Don't expose internal details to clients
                log::error!("Session error: {}", message);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert rate limiter rejections to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::RateLimitExceeded { .. } => ApiError::TooManyRequests {
                message: "Too many requests, try again later".to_string(),
                location,
            },
            other if other.is_token_rejection() => ApiError::Unauthorized {
                message: "Unauthorized request".to_string(),
                location,
            },
            other => {
                log::error!("Auth error: {}", other);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert multipart parse errors to API errors
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid multipart body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON extractor rejections (bad syntax, wrong content type) to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert a non-multipart register request to an API error
impl From<MultipartRejection> for ApiError {
    #[track_caller]
    fn from(e: MultipartRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid multipart body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
