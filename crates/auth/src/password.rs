//! Password complexity policy and one-way hashing (Argon2id).

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::AuthError;

/// Symbols accepted (and required, at least one) by the complexity policy.
const ALLOWED_SYMBOLS: &str = "@$!%*?&";

const MIN_LENGTH: usize = 8;

/// Enforce the fixed complexity policy: at least 8 characters, one lowercase,
/// one uppercase, one digit, one symbol from [`ALLOWED_SYMBOLS`], and nothing
/// outside ASCII alphanumerics plus that symbol set.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;

    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ if ALLOWED_SYMBOLS.contains(c) => symbol = true,
            _ => return Err(AuthError::WeakPassword),
        }
    }

    if password.chars().count() < MIN_LENGTH || !(lower && upper && digit && symbol) {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

/// Hash a password with a per-hash random salt, returning a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Credential(e.to_string()))
}

/// Compare a candidate password against a stored PHC hash.
///
/// An unparseable stored hash yields `false` rather than an error: the login
/// path must stay uniform and leak nothing about the stored record.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
