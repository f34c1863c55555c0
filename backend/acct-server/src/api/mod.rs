pub mod api_response;
pub mod error;
pub mod extractors;
pub mod session_cookies;
pub mod users;
