//! Axum extractor for access-token authentication

use crate::{ACCESS_TOKEN_COOKIE, ApiError, AppState, SessionCookies};

use acct_core::User;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// The user an access token was issued to
///
/// Reads the `accessToken` cookie first, then `Authorization: Bearer <token>`.
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn access_token(headers: &HeaderMap) -> Option<String> {
        SessionCookies::read(headers, ACCESS_TOKEN_COOKIE).or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .map(|token| token.trim().to_string())
        })
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = Self::access_token(&parts.headers);
            let user = state.sessions.authenticate(token.as_deref()).await?;

            log::debug!("Authenticated user {}", user.id);

            Ok(AuthenticatedUser(user))
        }
    }
}
