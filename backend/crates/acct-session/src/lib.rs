//! Account lifecycle: registration, login, token refresh and logout.
//!
//! Both services take their collaborators as trait objects, so the HTTP layer
//! and the tests wire in whichever store and media host they need.

pub mod error;
pub mod login_outcome;
pub mod login_request;
pub mod register_request;
pub mod registrar;
pub mod session_coordinator;

pub use error::{Result, SessionError};
pub use login_outcome::LoginOutcome;
pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use registrar::Registrar;
pub use session_coordinator::SessionCoordinator;
