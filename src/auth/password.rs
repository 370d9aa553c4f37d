use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{AppError, AppResult};

/// One-way bcrypt transform with a random per-call salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Recomputes and compares. A mismatch and a malformed stored hash are both
/// `false`; callers must not be able to tell them apart.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    verify(password, stored_hash).unwrap_or(false)
}
