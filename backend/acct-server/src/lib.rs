pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    api_response::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    session_cookies::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, SessionCookies},
    users::{
        login_response::LoginResponse,
        refresh_token_request::RefreshTokenRequest,
        register_form::read_register_form,
        user_response::UserResponse,
        users::{current_user, login, logout, refresh_token, register},
    },
};
pub use app_state::AppState;
pub use routes::build_router;
