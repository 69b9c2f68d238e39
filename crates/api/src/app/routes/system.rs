use axum::{Json, extract::Extension, response::IntoResponse};
use serde_json::json;

use portero_auth::{Role, SecurityContext, require_any_role};

use crate::app::errors;

/// GET /health — public liveness probe.
pub async fn health() -> axum::response::Response {
    Json(json!({ "status": "ok" })).into_response()
}

/// GET /whoami — echo the bound principal. Any authenticated role suffices.
pub async fn whoami(ctx: Option<Extension<SecurityContext>>) -> axum::response::Response {
    let ctx = ctx.as_ref().map(|ext| &ext.0);

    let ctx = match require_any_role(ctx, &[Role::User, Role::Admin]) {
        Ok(ctx) => ctx,
        Err(err) => return errors::auth_error_response(&err),
    };

    Json(json!({
        "username": ctx.subject(),
        "roles": ctx.granted_roles(),
    }))
    .into_response()
}
