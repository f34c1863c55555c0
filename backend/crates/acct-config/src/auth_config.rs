use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_REFRESH_TOKEN_TTL,
    MAX_TOKEN_TTL_DAYS, MIN_SECRET_LENGTH,
};

use acct_auth::TokenPolicy;

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Token signing settings. TTLs are humantime strings ("15m", "1d").
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub access_token_secret: Option<String>,
    pub access_token_ttl: String,
    pub refresh_token_secret: Option<String>,
    pub refresh_token_ttl: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: None,
            access_token_ttl: String::from(DEFAULT_ACCESS_TOKEN_TTL),
            refresh_token_secret: None,
            refresh_token_ttl: String::from(DEFAULT_REFRESH_TOKEN_TTL),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_secret", &self.access_token_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_secret", &self.refresh_token_secret.as_ref().map(|_| "<redacted>"))
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let access = Self::secret("auth.access_token_secret", &self.access_token_secret)?;
        let refresh = Self::secret("auth.refresh_token_secret", &self.refresh_token_secret)?;

        if access == refresh {
            return Err(ConfigError::auth(
                "auth.access_token_secret and auth.refresh_token_secret must differ",
            ));
        }

        let access_ttl = self.access_ttl()?;
        let refresh_ttl = self.refresh_ttl()?;

        if access_ttl >= refresh_ttl {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl ({}) must be shorter than auth.refresh_token_ttl ({})",
                self.access_token_ttl, self.refresh_token_ttl
            )));
        }

        Ok(())
    }

    pub fn access_ttl(&self) -> ConfigErrorResult<Duration> {
        Self::ttl("auth.access_token_ttl", &self.access_token_ttl)
    }

    pub fn refresh_ttl(&self) -> ConfigErrorResult<Duration> {
        Self::ttl("auth.refresh_token_ttl", &self.refresh_token_ttl)
    }

    /// Build the signing policy. Call after `validate()`.
    pub fn token_policy(&self) -> ConfigErrorResult<TokenPolicy> {
        Ok(TokenPolicy {
            access_secret: Self::secret("auth.access_token_secret", &self.access_token_secret)?
                .to_string(),
            access_ttl: self.access_ttl()?,
            refresh_secret: Self::secret("auth.refresh_token_secret", &self.refresh_token_secret)?
                .to_string(),
            refresh_ttl: self.refresh_ttl()?,
        })
    }

    #[track_caller]
    fn secret<'a>(name: &str, value: &'a Option<String>) -> ConfigErrorResult<&'a str> {
        match value.as_deref() {
            None => Err(ConfigError::auth(format!("{} is required", name))),
            Some(secret) if secret.len() < MIN_SECRET_LENGTH => Err(ConfigError::auth(format!(
                "{} must be at least {} characters",
                name, MIN_SECRET_LENGTH
            ))),
            Some(secret) => Ok(secret),
        }
    }

    #[track_caller]
    fn ttl(name: &str, value: &str) -> ConfigErrorResult<Duration> {
        let ttl = humantime::parse_duration(value.trim())
            .map_err(|e| ConfigError::auth(format!("{} '{}' is invalid: {}", name, value, e)))?;

        if ttl.is_zero() {
            return Err(ConfigError::auth(format!("{} must be greater than zero", name)));
        }

        if ttl > Duration::from_secs(MAX_TOKEN_TTL_DAYS * 24 * 3600) {
            return Err(ConfigError::auth(format!(
                "{} must be at most {} days",
                name, MAX_TOKEN_TTL_DAYS
            )));
        }

        Ok(ttl)
    }
}
