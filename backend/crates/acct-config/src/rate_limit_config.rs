use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const AUTH_REQUESTS_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const DEFAULT_AUTH_REQUESTS: u32 = 30;

pub const AUTH_WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=3600;
pub const DEFAULT_AUTH_WINDOW_SECS: u64 = 60;

/// Budget for credential-bearing requests (login and refresh-token).
///
/// One process-wide bucket: `max_requests` may arrive in a burst, after which
/// the bucket refills evenly over `window_secs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_AUTH_REQUESTS,
            window_secs: DEFAULT_AUTH_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range("max_requests", self.max_requests, &AUTH_REQUESTS_RANGE)?;
        Self::check_range("window_secs", self.window_secs, &AUTH_WINDOW_SECS_RANGE)
    }

    #[track_caller]
    fn check_range<T>(key: &str, value: T, range: &RangeInclusive<T>) -> ConfigErrorResult<()>
    where
        T: PartialOrd + std::fmt::Display,
    {
        if range.contains(&value) {
            return Ok(());
        }

        Err(ConfigError::config(format!(
            "rate_limit.{} must be {}-{}, got {}",
            key,
            range.start(),
            range.end(),
            value
        )))
    }
}

impl From<&RateLimitConfig> for acct_auth::RateLimitConfig {
    fn from(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window_secs: config.window_secs,
        }
    }
}
