//! User account REST API handlers

use crate::{
    ApiError, ApiResponse, ApiResult, AppState, AuthenticatedUser, LoginResponse,
    REFRESH_TOKEN_COOKIE, RefreshTokenRequest, SessionCookies, UserResponse, read_register_form,
};

use acct_auth::TokenPair;
use acct_session::LoginRequest;

use std::panic::Location;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use error_location::ErrorLocation;
use serde_json::json;

/// POST /api/v1/users/register
pub async fn register(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Response> {
    let request = read_register_form(multipart?).await?;
    let user = state.registrar.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            UserResponse { user },
            "User registered Successfully",
        )),
    )
        .into_response())
}

/// POST /api/v1/users/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    state.rate_limiter.check()?;
    let Json(request) = payload?;

    let outcome = state.sessions.login(request).await?;
    let cookies = state.cookies.issue(&outcome.tokens);

    let TokenPair {
        access_token,
        refresh_token,
    } = outcome.tokens;

    Ok((
        cookies,
        Json(ApiResponse::new(
            StatusCode::OK,
            LoginResponse {
                user: outcome.user,
                access_token,
                refresh_token,
            },
            "User logged In Successfully",
        )),
    )
        .into_response())
}

/// POST /api/v1/users/logout
pub async fn logout(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Response> {
    state.sessions.logout(user.id).await?;

    Ok((
        state.cookies.clear(),
        Json(ApiResponse::new(StatusCode::OK, json!({}), "User logged Out")),
    )
        .into_response())
}

/// POST /api/v1/users/refresh-token
///
/// Token comes from the `refreshToken` cookie, else from the JSON body.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    state.rate_limiter.check()?;

    let presented = match SessionCookies::read(&headers, REFRESH_TOKEN_COOKIE) {
        Some(token) => Some(token),
        None => parse_refresh_body(&body)?.refresh_token,
    };

    let tokens = state.sessions.refresh(presented.as_deref()).await?;
    let cookies = state.cookies.issue(&tokens);

    Ok((
        cookies,
        Json(ApiResponse::new(StatusCode::OK, tokens, "Access token refreshed")),
    )
        .into_response())
}

/// GET /api/v1/users/current-user
pub async fn current_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.sessions.current_user(user.id).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK,
        UserResponse { user },
        "User fetched successfully",
    )))
}

#[track_caller]
fn parse_refresh_body(body: &Bytes) -> ApiResult<RefreshTokenRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RefreshTokenRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest {
        message: format!("Invalid JSON body: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
