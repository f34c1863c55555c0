mod api_response;
mod error;
mod session_cookies;
