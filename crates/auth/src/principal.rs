use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use portero_core::{Audit, Subject};

use crate::Role;

/// Persisted shape of a principal in the credential store.
///
/// Carries the full profile plus audit metadata; this is the record the
/// store hands back and forth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub subject: Subject,
    pub full_name: String,
    pub password_hash: String,
    pub roles: BTreeSet<Role>,
    pub audit: Audit,
}

/// Authentication-facing view of a principal.
///
/// Deliberately a small value *composed from* a [`UserRecord`] rather than a
/// wrapper inheriting its lifecycle: the pipeline and login path only need
/// the subject, the hashed secret and the granted role names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: Subject,
    pub password_hash: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            subject: record.subject.clone(),
            password_hash: record.password_hash.clone(),
            roles: record.roles.clone(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portero_core::SYSTEM_ACTOR;

    #[test]
    fn principal_is_a_projection_of_the_record() {
        let record = UserRecord {
            subject: Subject::new("alice"),
            full_name: "Alice Smith".into(),
            password_hash: "$argon2id$...".into(),
            roles: BTreeSet::from([Role::User, Role::Admin]),
            audit: Audit::created_by(SYSTEM_ACTOR),
        };

        let principal = Principal::from_record(&record);
        assert_eq!(principal.subject, record.subject);
        assert!(principal.has_role(Role::Admin));
        assert!(principal.has_role(Role::User));
    }
}
