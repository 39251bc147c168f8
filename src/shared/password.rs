use crate::core::error::{AppError, Result};
use crate::shared::constants::PASSWORD_HASH_COST;

/// Hash a password with bcrypt on the blocking pool
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch, not a server error.
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!("Stored password hash could not be checked: {}", e);
            Ok(false)
        }
    }
}
