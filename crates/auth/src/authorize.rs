//! Declarative per-endpoint role checks.
//!
//! The guard is an explicit function invoked at the top of each protected
//! handler, taking the required-role set as a plain argument. This keeps
//! authorization testable without framework metadata.

use crate::{AuthError, Role, SecurityContext};

/// Authorize a request against a required-role set with **any-of** semantics:
/// the request passes if the bound context holds at least one required role.
///
/// Distinguishes two failures that must never be conflated:
/// - no context bound at all → [`AuthError::AuthenticationRequired`]
/// - context bound but no required role → [`AuthError::AccessDenied`]
///
/// No IO, no panics, pure policy check.
pub fn require_any_role<'a>(
    ctx: Option<&'a SecurityContext>,
    required: &[Role],
) -> Result<&'a SecurityContext, AuthError> {
    let ctx = ctx.ok_or(AuthError::AuthenticationRequired)?;

    if required.iter().any(|role| ctx.has_role(*role)) {
        Ok(ctx)
    } else {
        tracing::debug!(
            subject = %ctx.subject(),
            required = ?required,
            "access denied: no required role granted"
        );
        Err(AuthError::AccessDenied)
    }
}
