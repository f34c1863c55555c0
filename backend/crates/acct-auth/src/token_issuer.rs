//! Mints and verifies the access/refresh token pair.
//!
//! Access and refresh tokens are signed with different secrets, so neither
//! kind verifies as the other.

use crate::{
    AccessClaims, AuthError, JwtValidator, RefreshClaims, Result as AuthErrorResult, TokenClaims,
    TokenPair, TokenPolicy,
};

use acct_core::User;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub struct TokenIssuer {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_validator: JwtValidator,
    refresh_validator: JwtValidator,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(policy: &TokenPolicy) -> Self {
        Self {
            access_key: EncodingKey::from_secret(policy.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(policy.refresh_secret.as_bytes()),
            access_validator: JwtValidator::with_hs256(policy.access_secret.as_bytes()),
            refresh_validator: JwtValidator::with_hs256(policy.refresh_secret.as_bytes()),
            access_ttl: policy.access_ttl,
            refresh_ttl: policy.refresh_ttl,
        }
    }

    /// Mint a new access/refresh pair for `user`
    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<TokenPair> {
        let now = Utc::now().timestamp();

        let access = AccessClaims::for_user(user, now, Self::expiry(now, self.access_ttl)?);
        let refresh = RefreshClaims::for_user(user, now, Self::expiry(now, self.refresh_ttl)?);

        Ok(TokenPair {
            access_token: Self::sign(&access, &self.access_key)?,
            refresh_token: Self::sign(&refresh, &self.refresh_key)?,
        })
    }

    /// Verify an access token with the access secret
    #[track_caller]
    pub fn verify_access(&self, token: &str) -> AuthErrorResult<AccessClaims> {
        self.access_validator.validate(token)
    }

    /// Verify a refresh token with the refresh secret
    #[track_caller]
    pub fn verify_refresh(&self, token: &str) -> AuthErrorResult<RefreshClaims> {
        self.refresh_validator.validate(token)
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    #[track_caller]
    fn expiry(now: i64, ttl: Duration) -> AuthErrorResult<i64> {
        i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|secs| now.checked_add(secs))
            .ok_or_else(|| AuthError::ExpiryOverflow {
                ttl_secs: ttl.as_secs(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn sign<C: TokenClaims>(claims: &C, key: &EncodingKey) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
