pub mod connection;
pub mod credential_store;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use credential_store::CredentialStore;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
