//! Stateless bearer tokens (HS256).
//!
//! Tokens are never stored server-side: validity is determined purely by
//! signature and expiry at verification time.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use portero_core::Subject;

use crate::AuthError;

/// HS256 wants at least 256 bits of key material.
const MIN_SECRET_BYTES: usize = 32;

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / principal identifier.
    pub sub: String,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

/// Signing-key misconfiguration, detected at startup.
#[derive(Debug, thiserror::Error)]
#[error("signing secret must be at least {MIN_SECRET_BYTES} bytes, got {0}")]
pub struct KeyTooShort(pub usize);

/// Issues and verifies signed, time-bounded tokens.
///
/// The key material is read-only after construction; a single instance is
/// shared process-wide and is safe for concurrent verification.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime_secs: u64,
}

impl TokenService {
    /// Build a service around a symmetric secret.
    ///
    /// A too-short secret is a deployment fault and must abort process
    /// initialization, so this returns an error instead of degrading.
    pub fn new(secret: &[u8], lifetime_secs: u64) -> Result<Self, KeyTooShort> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(KeyTooShort(secret.len()));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime_secs,
        })
    }

    /// Configured token lifetime, exposed so a login response can tell the
    /// client when its token becomes stale.
    pub fn expiration_seconds(&self) -> u64 {
        self.lifetime_secs
    }

    /// Issue a token for `subject`, expiring `lifetime_secs` from now.
    pub fn issue(&self, subject: &Subject) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.as_str().to_string(),
            iat: now,
            exp: now + self.lifetime_secs as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Credential(e.to_string()))
    }

    /// Verify signature and expiry, returning the subject on success.
    ///
    /// An expired-but-authentic token is surfaced as [`AuthError::TokenExpired`]
    /// so the caller can tell the client to re-authenticate; every other
    /// failure (malformed, signature mismatch) collapses into
    /// [`AuthError::TokenInvalid`] and is treated as "no credential presented".
    pub fn verify(&self, token: &str) -> Result<Subject, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(Subject::new(data.claims.sub)),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::TokenExpired),
                _ => {
                    tracing::debug!(error = %err, "token rejected");
                    Err(AuthError::TokenInvalid)
                }
            },
        }
    }
}
