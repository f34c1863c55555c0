use acct_auth::AuthError;
use acct_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub(crate) const MSG_DUPLICATE_USER: &str = "User with email or username already exists";

/// Outcome-level failures. The HTTP layer maps each variant to one status
/// code and shows `message` to the client verbatim.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn validation(message: &str, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.to_string(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: &str) -> Self {
        Self::Conflict {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: &str) -> Self {
        Self::NotFound {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: &str) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing message, without the source location
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Conflict { message, .. }
            | Self::NotFound { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl From<DbError> for SessionError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::Conflict { .. } => Self::conflict(MSG_DUPLICATE_USER),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<AuthError> for SessionError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        if err.is_token_rejection() {
            Self::unauthorized("Invalid token")
        } else {
            Self::internal(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
