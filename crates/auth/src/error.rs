//! Error model for the authentication/authorization core.

use thiserror::Error;

/// All failure kinds this core can produce.
///
/// Every variant is converted at the API boundary into a structured response
/// (machine code + human message + status); none propagate as process faults.
/// The single fatal case, a misconfigured signing key, is reported by
/// [`crate::TokenService::new`] before any request is served.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The token's signature was authentic but its expiry has passed.
    /// Kept distinct from [`AuthError::TokenInvalid`] so clients get a
    /// specific "session expired, login again" signal.
    #[error("the token is expired, please login again")]
    TokenExpired,

    /// Malformed token or signature mismatch. The pipeline absorbs this into
    /// "no credential presented" rather than failing the request.
    #[error("the token is not valid")]
    TokenInvalid,

    /// No principal exists for the given subject (token re-validation or
    /// admin lookup). Never produced by the login comparison.
    #[error("could not find user '{0}'")]
    PrincipalNotFound(String),

    /// A protected operation was hit without any bound security context.
    #[error("authentication is required to access this resource")]
    AuthenticationRequired,

    /// Bad credentials. Deliberately uniform: the message never reveals
    /// whether the username or the password was wrong.
    #[error("invalid username or password")]
    AuthenticationFailed,

    /// Authenticated, but the granted roles satisfy none of the required ones.
    #[error("access denied: you do not have the necessary permissions for this resource")]
    AccessDenied,

    /// Signup for a username that is already taken (case-insensitive).
    #[error("the specified user already exists")]
    AlreadyExists,

    /// Password failed the complexity policy.
    #[error(
        "password must have at least one uppercase letter, one lowercase letter, \
         one number, one special character, and be at least 8 characters long"
    )]
    WeakPassword,

    /// Role assignment referenced names outside the known enumeration.
    #[error("invalid roles found: {0}")]
    InvalidRoleName(String),

    /// Password hashing backend failure. Not an input error.
    #[error("credential hashing failed: {0}")]
    Credential(String),
}
