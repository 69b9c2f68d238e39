//! Login and signup endpoints.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;

use portero_auth::SignupRequest;

use crate::app::dto::{JwtResponse, LoginRequest, SignupBody};
use crate::app::{AppServices, errors};

pub fn router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// POST /auth/signup — register a new principal with the default role.
pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<SignupBody>,
) -> axum::response::Response {
    tracing::debug!(username = %body.username, "signup requested");

    let request = SignupRequest {
        username: body.username,
        password: body.password,
        full_name: body.full_name,
    };

    match services.auth.signup(request) {
        Ok(record) => (
            StatusCode::CREATED,
            Json(json!({
                "message": format!("User created: {}", record.subject),
                "username": record.subject,
            })),
        )
            .into_response(),
        Err(err) => errors::auth_error_response(&err),
    }
}

/// POST /auth/login — verify credentials and issue a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    let principal = match services.auth.authenticate(&body.username, &body.password) {
        Ok(principal) => principal,
        Err(err) => return errors::auth_error_response(&err),
    };

    match services.tokens.issue(&principal.subject) {
        Ok(token) => Json(JwtResponse {
            access_token: token,
            expires_in: services.tokens.expiration_seconds(),
        })
        .into_response(),
        Err(err) => errors::auth_error_response(&err),
    }
}
