//! SQLite-backed credential store.
//!
//! Refresh token rotation is a single conditional UPDATE, so two requests
//! racing on the same token can never both observe it as current and both
//! succeed.

use crate::repositories::user_row::UserRow;
use crate::{CredentialStore, DbError, Result as DbErrorResult};

use acct_core::{ErrorLocation, User};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_USER: &str = r#"
    SELECT id, username, email, full_name, password_hash, avatar,
        cover_image, refresh_token, created_at, updated_at
    FROM users
"#;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, email, full_name, password_hash, avatar,
                    cover_image, refresh_token, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(&user.cover_image)
        .bind(&user.refresh_token)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::Conflict {
                    message: db_err.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => DbError::from(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row: Option<UserRow> = sqlx::query_as(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_login(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> DbErrorResult<Option<User>> {
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        // A NULL bind never matches, so an absent identifier is simply ignored.
        // When username and email name different users, the username wins.
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "{SELECT_USER} WHERE username = ? OR email = ? ORDER BY username = ? DESC LIMIT 1"
        ))
        .bind(username)
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn exists(&self, username: &str, email: &str) -> DbErrorResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE username = ? OR email = ? LIMIT 1")
                .bind(username)
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    async fn set_refresh_token(&self, id: Uuid, token: &str) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        let result =
            sqlx::query("UPDATE users SET refresh_token = ?, updated_at = ? WHERE id = ?")
                .bind(token)
                .bind(updated_at)
                .bind(id_str)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        expected: &str,
        replacement: &str,
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET refresh_token = ?, updated_at = ?
                WHERE id = ? AND refresh_token = ?
            "#,
        )
        .bind(replacement)
        .bind(updated_at)
        .bind(id_str)
        .bind(expected)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn clear_refresh_token(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE users
                SET refresh_token = NULL, updated_at = ?
                WHERE id = ? AND refresh_token IS NOT NULL
            "#,
        )
        .bind(updated_at)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
