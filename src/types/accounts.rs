use serde::{Deserialize, Serialize};

use crate::db::models::{AdminRole, AdminUser};

fn default_role() -> AdminRole {
    AdminRole::Admin
}

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_role")]
    pub role: AdminRole,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthUserOut {
    pub uid: i64,
    pub email: String,
    pub display_name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for AuthUserOut {
    fn from(user: &AdminUser) -> Self {
        Self {
            uid: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
        }
    }
}

/// Issued on register/login: the bearer token plus the public user fields.
#[derive(Debug, Serialize)]
pub struct AuthResult {
    pub token: String,
    pub user: AuthUserOut,
}
