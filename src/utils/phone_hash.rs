use crate::error::{AppError, AppResult};
use bcrypt::{hash, verify};

/// Cost bounds bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// Hashes a phone number for storage.
///
/// Phone numbers double as the login secret, so they are stored the same way
/// a password would be.
pub fn hash_phone(phone: &str, cost: u32) -> AppResult<String> {
    hash(phone, cost).map_err(|e| AppError::InternalError(format!("Failed to hash phone: {e}")))
}

/// Checks a raw phone number against a stored hash.
pub fn verify_phone(phone: &str, hashed: &str) -> AppResult<bool> {
    verify(phone, hashed)
        .map_err(|e| AppError::InternalError(format!("Failed to verify phone: {e}")))
}
