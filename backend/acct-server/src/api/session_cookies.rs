//! `accessToken` / `refreshToken` cookies.
//!
//! Both are HttpOnly. Max-Age follows the matching token TTL, so the browser
//! drops each cookie when its token would stop verifying anyway.

use acct_auth::{TokenPair, TokenPolicy};
use acct_config::{CookieConfig, SameSitePolicy};

use std::time::Duration;

use axum::http::{HeaderMap, header};
use axum::response::AppendHeaders;
use cookie::time::{Duration as CookieDuration, OffsetDateTime};
use cookie::{Cookie, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

type SetCookies = AppendHeaders<[(header::HeaderName, String); 2]>;

#[derive(Debug, Clone)]
pub struct SessionCookies {
    secure: bool,
    same_site: SameSite,
    path: String,
    domain: Option<String>,
    access_max_age: CookieDuration,
    refresh_max_age: CookieDuration,
}

impl SessionCookies {
    pub fn new(config: &CookieConfig, policy: &TokenPolicy) -> Self {
        Self {
            secure: config.secure,
            same_site: match config.same_site {
                SameSitePolicy::Strict => SameSite::Strict,
                SameSitePolicy::Lax => SameSite::Lax,
                SameSitePolicy::None => SameSite::None,
            },
            path: config.path.clone(),
            domain: config.domain.clone(),
            access_max_age: Self::max_age(policy.access_ttl),
            refresh_max_age: Self::max_age(policy.refresh_ttl),
        }
    }

    /// Set-Cookie headers carrying a freshly issued pair
    pub fn issue(&self, tokens: &TokenPair) -> SetCookies {
        AppendHeaders([
            (
                header::SET_COOKIE,
                self.cookie(ACCESS_TOKEN_COOKIE, &tokens.access_token)
                    .max_age(self.access_max_age)
                    .build()
                    .to_string(),
            ),
            (
                header::SET_COOKIE,
                self.cookie(REFRESH_TOKEN_COOKIE, &tokens.refresh_token)
                    .max_age(self.refresh_max_age)
                    .build()
                    .to_string(),
            ),
        ])
    }

    /// Set-Cookie headers that make the browser drop both cookies
    pub fn clear(&self) -> SetCookies {
        AppendHeaders([
            (header::SET_COOKIE, self.expired(ACCESS_TOKEN_COOKIE)),
            (header::SET_COOKIE, self.expired(REFRESH_TOKEN_COOKIE)),
        ])
    }

    /// Value of the named cookie from the request's Cookie headers
    pub fn read(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    fn cookie<'c>(&self, name: &'c str, value: &'c str) -> cookie::CookieBuilder<'c> {
        let mut builder = Cookie::build((name, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path(self.path.clone());

        if let Some(ref domain) = self.domain {
            builder = builder.domain(domain.clone());
        }

        builder
    }

    fn expired(&self, name: &str) -> String {
        self.cookie(name, "")
            .max_age(CookieDuration::ZERO)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .build()
            .to_string()
    }

    fn max_age(ttl: Duration) -> CookieDuration {
        CookieDuration::seconds(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX))
    }
}
