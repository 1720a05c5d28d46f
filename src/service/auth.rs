use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::{Rng, distributions::Alphanumeric};

use crate::db::Storage;
use crate::error::ApiError;
use crate::response::messages;
use crate::types::accounts::{AuthResult, AuthUserOut, RegisterPayload};

const TOKEN_LEN: usize = 40;

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Opaque bearer token, 40 alphanumeric chars.
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

pub async fn register(store: &Storage, payload: &RegisterPayload) -> Result<AuthResult, ApiError> {
    if !payload.email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let display_name = if payload.display_name.is_empty() {
        payload.email.clone()
    } else {
        payload.display_name.clone()
    };

    let hash = hash_password(&payload.password)?;
    let user = store
        .create_user(&payload.email, &hash, &display_name, payload.role)
        .await?;
    let token = store.get_or_create_token(user.id, &generate_token()).await?;

    tracing::info!(user_id = user.id, email = %user.email, "admin registered");
    Ok(AuthResult {
        token,
        user: AuthUserOut::from(&user),
    })
}

/// Logging in twice reuses the outstanding token. A wrong password and an
/// unknown email are indistinguishable to the caller.
pub async fn login(store: &Storage, email: &str, password: &str) -> Result<AuthResult, ApiError> {
    let user = store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(messages::INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(password, &user.password_hash) {
        return Err(ApiError::Unauthorized(
            messages::INVALID_CREDENTIALS.to_string(),
        ));
    }

    let token = store.get_or_create_token(user.id, &generate_token()).await?;
    Ok(AuthResult {
        token,
        user: AuthUserOut::from(&user),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash));
        assert!(!verify_password("hunter3hunter3", &hash));
    }

    #[test]
    fn bogus_hash_never_verifies() {
        assert!(!verify_password("whatever", "not-a-phc-string"));
    }

    #[test]
    fn tokens_are_long_and_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 40);
        assert_ne!(a, b);
    }
}
