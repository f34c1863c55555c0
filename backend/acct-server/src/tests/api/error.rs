use crate::ApiError;

use acct_auth::AuthError;
use acct_session::SessionError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_json_body() {
    let error = ApiError::Unauthorized {
        message: "Invalid Refresh Token".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid Refresh Token");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Avatar file is required".into(),
        field: Some("avatar".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "avatar");
}

#[tokio::test]
async fn test_too_many_requests_returns_429() {
    let error = ApiError::TooManyRequests {
        message: "slow down".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[test]
fn test_session_conflict_converts_to_conflict() {
    let api_err: ApiError = SessionError::conflict("User with email or username already exists").into();

    match api_err {
        ApiError::Conflict { message, .. } => {
            assert_eq!(message, "User with email or username already exists");
        }
        other => panic!("Expected Conflict error, got {:?}", other),
    }
}

#[test]
fn test_session_internal_hides_details() {
    let api_err: ApiError = SessionError::internal("SQLx error: disk I/O error").into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert!(!message.contains("SQLx"));
        }
        other => panic!("Expected Internal error, got {:?}", other),
    }
}

#[test]
fn test_rate_limit_converts_to_too_many_requests() {
    let api_err: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(api_err, ApiError::TooManyRequests { .. }));
}
