pub mod login_response;
pub mod refresh_token_request;
pub mod register_form;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
