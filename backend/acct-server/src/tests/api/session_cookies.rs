use crate::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, SessionCookies};

use acct_auth::{TokenPair, TokenPolicy};
use acct_config::CookieConfig;

use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::IntoResponse;

fn cookies() -> SessionCookies {
    let policy = TokenPolicy {
        access_secret: "a".repeat(32),
        access_ttl: Duration::from_secs(60),
        refresh_secret: "r".repeat(32),
        refresh_ttl: Duration::from_secs(3600),
    };
    SessionCookies::new(&CookieConfig::default(), &policy)
}

fn set_cookie_headers(response: axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_issue_sets_both_http_only_secure_cookies() {
    let tokens = TokenPair {
        access_token: "access.jwt".into(),
        refresh_token: "refresh.jwt".into(),
    };

    let headers = set_cookie_headers((cookies().issue(&tokens), "ok").into_response());

    assert_eq!(headers.len(), 2);
    assert!(headers[0].starts_with("accessToken=access.jwt"));
    assert!(headers[0].contains("Max-Age=60"));
    assert!(headers[1].starts_with("refreshToken=refresh.jwt"));
    assert!(headers[1].contains("Max-Age=3600"));
    for header in &headers {
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Secure"));
        assert!(header.contains("Path=/"));
    }
}

#[test]
fn test_clear_expires_both_cookies() {
    let headers = set_cookie_headers((cookies().clear(), "ok").into_response());

    assert_eq!(headers.len(), 2);
    assert!(headers[0].starts_with("accessToken="));
    assert!(headers[1].starts_with("refreshToken="));
    for header in &headers {
        assert!(header.contains("Max-Age=0"));
    }
}

#[test]
fn test_read_finds_named_cookie_among_others() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; refreshToken=r.t.k; accessToken=a.t.k"),
    );

    assert_eq!(
        SessionCookies::read(&headers, REFRESH_TOKEN_COOKIE).as_deref(),
        Some("r.t.k")
    );
    assert_eq!(
        SessionCookies::read(&headers, ACCESS_TOKEN_COOKIE).as_deref(),
        Some("a.t.k")
    );
    assert_eq!(SessionCookies::read(&headers, "missing"), None);
}

#[test]
fn test_read_ignores_empty_cookie_value() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("refreshToken="));

    assert_eq!(SessionCookies::read(&headers, REFRESH_TOKEN_COOKIE), None);
}
