use std::collections::BTreeSet;

use portero_core::Subject;

use crate::{Principal, Role};

/// Request-scoped binding of the authenticated principal.
///
/// Created at most once per request by the authentication pipeline and
/// threaded explicitly to the authorization guard and the auditor; there is
/// no ambient/global accessor. Once bound it is never overwritten within the
/// same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    subject: Subject,
    granted_roles: BTreeSet<Role>,
}

impl SecurityContext {
    pub fn new(subject: Subject, granted_roles: BTreeSet<Role>) -> Self {
        Self {
            subject,
            granted_roles,
        }
    }

    pub fn for_principal(principal: &Principal) -> Self {
        Self {
            subject: principal.subject.clone(),
            granted_roles: principal.roles.clone(),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn granted_roles(&self) -> &BTreeSet<Role> {
        &self.granted_roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.granted_roles.contains(&role)
    }
}
