
use crate::TokenPolicy;

use acct_core::User;

use std::time::Duration;

pub(crate) const ACCESS_SECRET: &str = "access-secret-key-at-least-32-bytes!";
pub(crate) const REFRESH_SECRET: &str = "refresh-secret-key-at-least-32-bytes";

pub(crate) fn test_policy() -> TokenPolicy {
    TokenPolicy {
        access_secret: ACCESS_SECRET.to_string(),
        access_ttl: Duration::from_secs(15 * 60),
        refresh_secret: REFRESH_SECRET.to_string(),
        refresh_ttl: Duration::from_secs(10 * 24 * 3600),
    }
}

pub(crate) fn test_user() -> User {
    User::new(
        "annlee",
        "ann@x.com",
        "Ann Lee",
        "$argon2id$placeholder".to_string(),
        "https://media.test/avatar.png".to_string(),
        None,
    )
}
