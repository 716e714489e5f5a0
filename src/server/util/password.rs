use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::auth::AuthError;

/// Hashes a password with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including algorithm parameters and salt
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
