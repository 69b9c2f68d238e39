//! The per-request authentication pipeline.
//!
//! Runs on every inbound request before any handler. A request without a
//! bearer token passes through anonymous; role requirements are enforced
//! later, at the handlers, by the authorization guard.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use portero_auth::{AuthError, PrincipalResolver, SecurityContext, TokenService};

use crate::app::errors;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub resolver: PrincipalResolver,
}

/// Authenticate the request and, when a valid token is presented, bind a
/// [`SecurityContext`] as a request extension.
///
/// Failure discipline (nothing here may crash the request worker):
/// - malformed/forged token → absorbed, request continues anonymous
/// - expired token → fatal, structured `token_expired` response so the client
///   knows to re-authenticate
/// - verified subject with no live principal (deleted after issuance) →
///   fatal, structured `principal_not_found` response; no context is bound
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    // A context, once bound, is never overwritten within the same request.
    if req.extensions().get::<SecurityContext>().is_some() {
        return next.run(req).await;
    }

    let Some(token) = extract_bearer(req.headers()).map(str::to_owned) else {
        return next.run(req).await;
    };

    let subject = match state.tokens.verify(&token) {
        Ok(subject) => subject,
        Err(AuthError::TokenInvalid) => {
            tracing::debug!("invalid bearer token, continuing unauthenticated");
            return next.run(req).await;
        }
        Err(err) => return errors::auth_error_response(&err),
    };

    // Re-validate that the subject still names a live principal; a token can
    // outlive its user.
    match state.resolver.resolve(subject.as_str()) {
        Ok(principal) => {
            req.extensions_mut()
                .insert(SecurityContext::for_principal(&principal));
            next.run(req).await
        }
        Err(err) => errors::auth_error_response(&err),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let token = header.to_str().ok()?.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
