use axum::{Router, routing::get};

pub mod auth;
pub mod system;
pub mod users;

/// Full route table. Role requirements are enforced inside the handlers by
/// the authorization guard, not by the router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/whoami", get(system::whoami))
        .nest("/auth", auth::router())
        .nest("/users", users::router())
}
