//! Persistence seam for user identities.
//!
//! The session layer only talks to this trait, so the store is injected as an
//! `Arc<dyn CredentialStore>` rather than reached through a global handle.

use crate::Result as DbErrorResult;

use acct_core::User;

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new user. Duplicate username or email yields `DbError::Conflict`.
    async fn create(&self, user: &User) -> DbErrorResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    /// Find a user whose username OR email matches. Values are compared as given.
    /// A username match takes precedence over an email match on another user.
    async fn find_by_login(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> DbErrorResult<Option<User>>;

    /// True if any user already holds this username or this email
    async fn exists(&self, username: &str, email: &str) -> DbErrorResult<bool>;

    /// Unconditionally overwrite the stored refresh token.
    /// Returns false if the user does not exist.
    async fn set_refresh_token(&self, id: Uuid, token: &str) -> DbErrorResult<bool>;

    /// Atomically replace `expected` with `replacement`.
    /// Returns false if the stored token is no longer `expected`.
    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        expected: &str,
        replacement: &str,
    ) -> DbErrorResult<bool>;

    /// Drop the stored refresh token. Succeeds even if none is stored.
    async fn clear_refresh_token(&self, id: Uuid) -> DbErrorResult<()>;
}
