pub mod auth_rate_limiter;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod rate_limit_config;
pub mod token_issuer;
pub mod token_pair;
pub mod token_policy;

pub use auth_rate_limiter::AuthRateLimiter;
pub use claims::{AccessClaims, RefreshClaims, TokenClaims};
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::TokenIssuer;
pub use token_pair::TokenPair;
pub use token_policy::TokenPolicy;

#[cfg(test)]
mod tests;
