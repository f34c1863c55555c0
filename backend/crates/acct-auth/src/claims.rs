use crate::{AuthError, Result as AuthErrorResult};

use acct_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Shared behaviour of the two JWT payloads
pub trait TokenClaims: Serialize + DeserializeOwned {
    /// Subject (user_id)
    fn subject(&self) -> &str;

    /// Unique token id
    fn token_id(&self) -> &str;

    /// Validate claims after JWT signature verification
    #[track_caller]
    fn validate(&self) -> AuthErrorResult<()> {
        if self.subject().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.token_id().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "jti".to_string(),
                message: "jti cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Access token payload: identifies the caller for API requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user_id)
    pub sub: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Unique token id, keeps two tokens minted in the same second distinct
    pub jti: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl AccessClaims {
    pub fn for_user(user: &User, iat: i64, exp: i64) -> Self {
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            jti: Uuid::new_v4().to_string(),
            iat,
            exp,
        }
    }
}

impl TokenClaims for AccessClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn token_id(&self) -> &str {
        &self.jti
    }
}

/// Refresh token payload: carries nothing but the user id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user_id)
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn for_user(user: &User, iat: i64, exp: i64) -> Self {
        Self {
            sub: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat,
            exp,
        }
    }
}

impl TokenClaims for RefreshClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn token_id(&self) -> &str {
        &self.jti
    }
}
