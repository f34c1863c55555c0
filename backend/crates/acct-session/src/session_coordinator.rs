//! Login, refresh, logout and access-token authentication.
//!
//! A user holds at most one live refresh token. Login overwrites it, refresh
//! swaps it with a compare-and-set, logout clears it.

use crate::{LoginOutcome, LoginRequest, Result as SessionResult, SessionError};

use acct_auth::{TokenIssuer, TokenPair, verify_password};
use acct_core::{PublicUser, User};
use acct_db::CredentialStore;

use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

const MSG_IDENTIFIER_REQUIRED: &str = "username or email is required";
const MSG_USER_NOT_FOUND: &str = "User does not exist";
const MSG_BAD_CREDENTIALS: &str = "Invalid user credentials";
const MSG_MISSING_TOKEN: &str = "Unauthorized request";
const MSG_BAD_REFRESH_TOKEN: &str = "Invalid Refresh Token";
const MSG_STALE_REFRESH_TOKEN: &str = "Refresh token is expired or used";
const MSG_BAD_ACCESS_TOKEN: &str = "Invalid Access Token";

pub struct SessionCoordinator {
    store: Arc<dyn CredentialStore>,
    issuer: Arc<TokenIssuer>,
}

impl SessionCoordinator {
    pub fn new(store: Arc<dyn CredentialStore>, issuer: Arc<TokenIssuer>) -> Self {
        Self { store, issuer }
    }

    /// Verify credentials and open a new session, replacing any previous one.
    pub async fn login(&self, request: LoginRequest) -> SessionResult<LoginOutcome> {
        let username = request.username().map(User::normalize_username);
        let email = request.email().map(User::normalize_email);

        if username.is_none() && email.is_none() {
            return Err(SessionError::validation(
                MSG_IDENTIFIER_REQUIRED,
                Some("username"),
            ));
        }

        let user = self
            .store
            .find_by_login(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| SessionError::not_found(MSG_USER_NOT_FOUND))?;

        if !verify_password(&request.password, &user.password_hash).await? {
            info!("Rejected login for user {}: bad password", user.id);
            return Err(SessionError::unauthorized(MSG_BAD_CREDENTIALS));
        }

        let tokens = self.issuer.issue(&user)?;

        if !self
            .store
            .set_refresh_token(user.id, &tokens.refresh_token)
            .await?
        {
            return Err(SessionError::not_found(MSG_USER_NOT_FOUND));
        }

        info!("User {} logged in", user.id);

        Ok(LoginOutcome {
            user: PublicUser::from(user),
            tokens,
        })
    }

    /// Exchange the presented refresh token for a new pair.
    ///
    /// The presented token is single-use: it must match the stored token, and
    /// the swap to the new token only succeeds if nobody else swapped first.
    pub async fn refresh(&self, presented: Option<&str>) -> SessionResult<TokenPair> {
        let presented = presented
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SessionError::unauthorized(MSG_MISSING_TOKEN))?;

        let claims = self.issuer.verify_refresh(presented).map_err(|e| {
            debug!("Refresh token rejected: {}", e);
            SessionError::unauthorized(MSG_BAD_REFRESH_TOKEN)
        })?;

        let user_id = User::parse_id(&claims.sub)
            .map_err(|_| SessionError::unauthorized(MSG_BAD_REFRESH_TOKEN))?;

        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| SessionError::unauthorized(MSG_BAD_REFRESH_TOKEN))?;

        if !user.holds_refresh_token(presented) {
            warn!("Stale refresh token presented for user {}", user.id);
            return Err(SessionError::unauthorized(MSG_STALE_REFRESH_TOKEN));
        }

        let tokens = self.issuer.issue(&user)?;

        let rotated = self
            .store
            .rotate_refresh_token(user.id, presented, &tokens.refresh_token)
            .await?;

        if !rotated {
            warn!("Lost refresh race for user {}", user.id);
            return Err(SessionError::unauthorized(MSG_STALE_REFRESH_TOKEN));
        }

        debug!("Rotated refresh token for user {}", user.id);

        Ok(tokens)
    }

    /// Close the user's session. Closing an already closed session succeeds.
    pub async fn logout(&self, user_id: Uuid) -> SessionResult<()> {
        self.store.clear_refresh_token(user_id).await?;
        info!("User {} logged out", user_id);
        Ok(())
    }

    /// Resolve an access token to the user it was issued for.
    pub async fn authenticate(&self, access_token: Option<&str>) -> SessionResult<User> {
        let access_token = access_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SessionError::unauthorized(MSG_MISSING_TOKEN))?;

        let claims = self.issuer.verify_access(access_token).map_err(|e| {
            debug!("Access token rejected: {}", e);
            SessionError::unauthorized(MSG_BAD_ACCESS_TOKEN)
        })?;

        let user_id = User::parse_id(&claims.sub)
            .map_err(|_| SessionError::unauthorized(MSG_BAD_ACCESS_TOKEN))?;

        self.store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| SessionError::unauthorized(MSG_BAD_ACCESS_TOKEN))
    }

    pub async fn current_user(&self, user_id: Uuid) -> SessionResult<PublicUser> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| SessionError::not_found(MSG_USER_NOT_FOUND))
    }
}
