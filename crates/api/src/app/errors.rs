use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use portero_auth::AuthError;

/// Map a core auth failure to its transport representation.
///
/// Every kind gets a machine-readable code, the human message from the error
/// itself, and an HTTP status; nothing propagates as an unhandled fault.
pub fn auth_error_response(err: &AuthError) -> axum::response::Response {
    let (status, code) = match err {
        AuthError::TokenExpired => (StatusCode::FORBIDDEN, "token_expired"),
        AuthError::TokenInvalid => (StatusCode::UNAUTHORIZED, "token_invalid"),
        AuthError::PrincipalNotFound(_) => (StatusCode::NOT_FOUND, "principal_not_found"),
        AuthError::AuthenticationRequired => (StatusCode::UNAUTHORIZED, "authentication_required"),
        AuthError::AuthenticationFailed => (StatusCode::UNAUTHORIZED, "authentication_failed"),
        AuthError::AccessDenied => (StatusCode::FORBIDDEN, "access_denied"),
        AuthError::AlreadyExists => (StatusCode::CONFLICT, "already_exists"),
        AuthError::WeakPassword => (StatusCode::BAD_REQUEST, "weak_password"),
        AuthError::InvalidRoleName(_) => (StatusCode::BAD_REQUEST, "invalid_role"),
        AuthError::Credential(_) => (StatusCode::INTERNAL_SERVER_ERROR, "credential_error"),
    };

    json_error(status, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
