//! Administrative user endpoints (role assignment, lookup, removal).

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use portero_auth::{
    AuthError, Role, SecurityContext, current_actor, require_any_role, validate_role_names,
};

use crate::app::dto::{RolesUpdateBody, UserResponse};
use crate::app::{AppServices, errors};

pub fn router() -> Router {
    Router::new()
        .route("/:username", get(get_user).delete(delete_user))
        .route("/:username/roles", put(update_roles))
}

/// GET /users/:username — fetch a user record including audit fields.
pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: Option<Extension<SecurityContext>>,
    Path(username): Path<String>,
) -> axum::response::Response {
    let ctx = ctx.as_ref().map(|ext| &ext.0);
    if let Err(err) = require_any_role(ctx, &[Role::Admin]) {
        return errors::auth_error_response(&err);
    }

    match services.store.find_by_subject(&username, true) {
        Some(record) => Json(UserResponse::from(&record)).into_response(),
        None => errors::auth_error_response(&AuthError::PrincipalNotFound(username)),
    }
}

/// PUT /users/:username/roles — replace the role set.
///
/// Every submitted name is validated against the known enumeration, and the
/// update is audit-stamped with the acting administrator.
pub async fn update_roles(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: Option<Extension<SecurityContext>>,
    Path(username): Path<String>,
    Json(body): Json<RolesUpdateBody>,
) -> axum::response::Response {
    let ctx = ctx.as_ref().map(|ext| &ext.0);
    let ctx = match require_any_role(ctx, &[Role::Admin]) {
        Ok(ctx) => ctx,
        Err(err) => return errors::auth_error_response(&err),
    };

    let roles = match validate_role_names(body.roles.iter().map(String::as_str)) {
        Ok(roles) => roles,
        Err(err) => return errors::auth_error_response(&err),
    };

    let Some(mut record) = services.store.find_by_subject(&username, true) else {
        return errors::auth_error_response(&AuthError::PrincipalNotFound(username));
    };

    record.roles = roles;
    record.audit.touch(current_actor(Some(ctx)));
    let stored = services.store.save(record);

    tracing::info!(
        username = %stored.subject,
        actor = %ctx.subject(),
        "user roles updated"
    );
    Json(UserResponse::from(&stored)).into_response()
}

/// DELETE /users/:username — remove a user record entirely.
///
/// Deletion is an administrative concern; issued tokens for the subject keep
/// verifying but fail principal re-validation in the pipeline afterwards.
pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: Option<Extension<SecurityContext>>,
    Path(username): Path<String>,
) -> axum::response::Response {
    let ctx = ctx.as_ref().map(|ext| &ext.0);
    if let Err(err) = require_any_role(ctx, &[Role::Admin]) {
        return errors::auth_error_response(&err);
    }

    if services.store.delete(&username) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::auth_error_response(&AuthError::PrincipalNotFound(username))
    }
}
