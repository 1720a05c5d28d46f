use chrono::Utc;

use crate::db::models::{AdminRole, AdminUser};
use crate::db::store::Storage;
use crate::error::ApiError;

impl Storage {
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        display_name: &str,
        role: AdminRole,
    ) -> Result<AdminUser, ApiError> {
        let created_at = Utc::now();
        let res = sqlx::query(
            r#"INSERT INTO admin_users (email, password_hash, display_name, role, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .bind(role)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| ApiError::on_unique(e, "A user with this email already exists"))?;

        Ok(AdminUser {
            id: res.last_insert_rowid(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            display_name: display_name.to_string(),
            role,
            created_at,
        })
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<AdminUser>, ApiError> {
        let row = sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Reuse the user's existing token if one is out there, otherwise persist
    /// `candidate`. Mirrors token get-or-create semantics: logging in twice
    /// hands back the same token until it is revoked.
    pub async fn get_or_create_token(
        &self,
        user_id: i64,
        candidate: &str,
    ) -> Result<String, ApiError> {
        let existing: Option<String> =
            sqlx::query_scalar("SELECT token FROM auth_tokens WHERE user_id = ? LIMIT 1")
                .bind(user_id)
                .fetch_optional(self.pool())
                .await?;
        if let Some(token) = existing {
            return Ok(token);
        }
        sqlx::query("INSERT INTO auth_tokens (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(candidate)
            .bind(user_id)
            .bind(Utc::now())
            .execute(self.pool())
            .await?;
        Ok(candidate.to_string())
    }

    pub async fn find_token_user(&self, token: &str) -> Result<Option<AdminUser>, ApiError> {
        let row = sqlx::query_as::<_, AdminUser>(
            r#"SELECT u.* FROM admin_users u
               JOIN auth_tokens t ON t.user_id = u.id
               WHERE t.token = ?"#,
        )
        .bind(token)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    pub async fn delete_user_tokens(&self, user_id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM auth_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
