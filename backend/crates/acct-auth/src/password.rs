//! Argon2 password hashing.
//!
//! Both operations run on the blocking thread pool (CPU-intensive).

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;
use log::warn;
use rand::Rng;

/// Hash a password into an Argon2id PHC string (salt included)
pub async fn hash_password(password: &str) -> AuthErrorResult<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Task join error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
}

/// Check a password against a stored PHC string.
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: &str, hashword: &str) -> AuthErrorResult<bool> {
    let password = password.to_string();
    let hashword = hashword.to_string();

    tokio::task::spawn_blocking(move || verify_blocking(&password, &hashword))
        .await
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Task join error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn salt() -> AuthErrorResult<SaltString> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes).map_err(|e| AuthError::PasswordHash {
        message: format!("Salt encoding failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn hash_blocking(password: &str) -> AuthErrorResult<String> {
    let salt = salt()?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn verify_blocking(password: &str, hashword: &str) -> bool {
    match PasswordHash::new(hashword) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(e) => {
            warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}
