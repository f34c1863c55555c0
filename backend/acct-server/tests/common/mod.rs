#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

mod multipart_body;

pub use multipart_body::MultipartBody;

use acct_auth::{AuthRateLimiter, RateLimitConfig, TokenPolicy};
use acct_config::CookieConfig;
use acct_core::ErrorLocation;
use acct_db::Database;
use acct_media::{MediaError, MediaFile, MediaUploader, Result as MediaResult, UploadedMedia};
use acct_server::{AppState, SessionCookies, build_router};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PASSWORD: &str = "p4ss";

/// Media host stand-in; a file named `broken.png` fails to upload
pub struct FakeUploader;

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(&self, file: MediaFile) -> MediaResult<UploadedMedia> {
        if file.file_name == "broken.png" {
            return Err(MediaError::Rejected {
                status: 502,
                message: "bad gateway".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(UploadedMedia {
            url: format!("https://media.test/{}", file.file_name),
        })
    }
}

pub fn test_policy() -> TokenPolicy {
    TokenPolicy {
        access_secret: "access-secret-key-at-least-32-bytes!".to_string(),
        access_ttl: Duration::from_secs(15 * 60),
        refresh_secret: "refresh-secret-key-at-least-32-bytes".to_string(),
        refresh_ttl: Duration::from_secs(10 * 24 * 3600),
    }
}

/// Create AppState for testing over in-memory SQLite
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_limit(RateLimitConfig::default()).await
}

pub async fn create_test_app_state_with_limit(rate_limit: RateLimitConfig) -> AppState {
    let pool = Database::in_memory()
        .await
        .expect("Failed to create test database");
    let policy = test_policy();

    AppState::new(
        pool,
        Arc::new(FakeUploader),
        &policy,
        SessionCookies::new(&CookieConfig::default(), &policy),
        AuthRateLimiter::new(rate_limit),
    )
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Response parts the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: serde_json::Value,
}

impl TestResponse {
    /// Value of a cookie set by this response
    pub fn cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&prefix))
            .map(|v| v[prefix.len()..].split(';').next().unwrap_or("").to_string())
    }

    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn register_request(form: MultipartBody) -> Request<Body> {
    let (content_type, body) = form.finish();
    Request::builder()
        .method("POST")
        .uri("/api/v1/users/register")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

/// The standard registration form for Ann Lee
pub fn ann_form() -> MultipartBody {
    MultipartBody::new()
        .text("fullName", "Ann Lee")
        .text("email", "ann@x.com")
        .text("username", "AnnLee")
        .text("password", PASSWORD)
        .file("avatar", "avatar.png", b"png bytes")
}

pub async fn register_ann(app: &Router) -> TestResponse {
    let response = send(app, register_request(ann_form())).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response
}

pub async fn login_ann(app: &Router) -> TestResponse {
    let response = send(
        app,
        json_request(
            "/api/v1/users/login",
            serde_json::json!({ "username": "annlee", "password": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response
}
