//! Resolution of the acting user for audit stamping.

use portero_core::SYSTEM_ACTOR;

use crate::SecurityContext;

/// The identifier recorded as created-by/modified-by when a record is
/// persisted. Invoked at commit time for creates and updates only.
///
/// With no bound context (the signup write happens before one exists) this
/// returns the distinguished system actor, never an empty value.
pub fn current_actor(ctx: Option<&SecurityContext>) -> String {
    match ctx {
        Some(ctx) => ctx.subject().to_string(),
        None => SYSTEM_ACTOR.to_string(),
    }
}
