mod auth_config;
mod config;
mod cookie_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod media_config;
mod rate_limit_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cookie_config::{CookieConfig, SameSitePolicy};
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use media_config::MediaConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".acct";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_ACCESS_TOKEN_TTL: &str = "1d";
const DEFAULT_REFRESH_TOKEN_TTL: &str = "10d";
const MIN_SECRET_LENGTH: usize = 32;
const MAX_TOKEN_TTL_DAYS: u64 = 365;

const DEFAULT_COOKIE_PATH: &str = "/";

const DEFAULT_MEDIA_TIMEOUT_SECS: u64 = 30;
const MIN_MEDIA_TIMEOUT_SECS: u64 = 1;
const MAX_MEDIA_TIMEOUT_SECS: u64 = 600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
