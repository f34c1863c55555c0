//! User identity record as held by the credential store.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// A registered account, including its secrets.
///
/// Not `Serialize`; responses carry [`crate::PublicUser`] instead.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Lowercased, unique
    pub username: String,
    /// Lowercased, unique
    pub email: String,
    pub full_name: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// URL of the uploaded avatar (required)
    pub avatar: String,
    /// URL of the uploaded cover image
    pub cover_image: Option<String>,
    /// The single live refresh token, if a session is open
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with normalized identifiers and no open session
    pub fn new(
        username: &str,
        email: &str,
        full_name: &str,
        password_hash: String,
        avatar: String,
        cover_image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: Self::normalize_username(username),
            email: Self::normalize_email(email),
            full_name: full_name.trim().to_string(),
            password_hash,
            avatar,
            cover_image,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn normalize_username(username: &str) -> String {
        username.trim().to_lowercase()
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Parse a user id as carried in a token subject
    #[track_caller]
    pub fn parse_id(raw: &str) -> CoreErrorResult<Uuid> {
        Uuid::parse_str(raw).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check whether a session is currently open
    pub fn has_session(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Check whether `token` is exactly the stored refresh token
    pub fn holds_refresh_token(&self, token: &str) -> bool {
        self.refresh_token.as_deref() == Some(token)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password_hash", &"<redacted>")
            .field("avatar", &self.avatar)
            .field("cover_image", &self.cover_image)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
