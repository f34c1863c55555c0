use crate::SessionCookies;
use crate::error::Result as ServerErrorResult;

use acct_auth::{AuthRateLimiter, TokenIssuer, TokenPolicy};
use acct_config::Config;
use acct_db::UserRepository;
use acct_media::{HttpMediaUploader, MediaUploader};
use acct_session::{Registrar, SessionCoordinator};

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use sqlx::SqlitePool;

/// Shared handles for every request. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub registrar: Arc<Registrar>,
    pub sessions: Arc<SessionCoordinator>,
    pub rate_limiter: Arc<AuthRateLimiter>,
    pub cookies: Arc<SessionCookies>,
    pub cors_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        uploader: Arc<dyn MediaUploader>,
        policy: &TokenPolicy,
        cookies: SessionCookies,
        rate_limiter: AuthRateLimiter,
    ) -> Self {
        let store = Arc::new(UserRepository::new(pool.clone()));
        let issuer = Arc::new(TokenIssuer::new(policy));

        Self {
            pool,
            registrar: Arc::new(Registrar::new(store.clone(), uploader)),
            sessions: Arc::new(SessionCoordinator::new(store, issuer)),
            rate_limiter: Arc::new(rate_limiter),
            cookies: Arc::new(cookies),
            cors_origins: Arc::new(Vec::new()),
        }
    }

    /// Wire everything from a validated config
    pub fn from_config(config: &Config, pool: SqlitePool) -> ServerErrorResult<Self> {
        let policy = config.auth.token_policy()?;

        let upload_url = config.media.upload_url.as_deref().unwrap_or_default();
        if config.media.api_key.is_none() {
            warn!("media.api_key not set, uploading without credentials");
        }
        let uploader = HttpMediaUploader::new(
            upload_url,
            config.media.api_key.as_deref(),
            Duration::from_secs(config.media.timeout_secs),
        )?;

        let cookies = SessionCookies::new(&config.cookie, &policy);
        let rate_limiter = AuthRateLimiter::new((&config.rate_limit).into());

        let mut state = Self::new(pool, Arc::new(uploader), &policy, cookies, rate_limiter);
        state.cors_origins = Arc::new(config.server.cors_origins.clone());

        Ok(state)
    }
}
