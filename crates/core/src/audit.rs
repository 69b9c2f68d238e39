//! Audit metadata stamped onto mutated records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actor recorded for writes that happen before any principal is bound
/// (the signup write itself). Never a null/empty value.
pub const SYSTEM_ACTOR: &str = "SIGNUP-PROCESS";

/// A single "who did this, and when" pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub actor: String,
    pub at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn now(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            at: Utc::now(),
        }
    }
}

/// Created-by / modified-by metadata carried by persisted records.
///
/// `last_modified` stays empty until the record is first updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub created: AuditStamp,
    pub last_modified: Option<AuditStamp>,
}

impl Audit {
    /// Metadata for a freshly created record.
    pub fn created_by(actor: impl Into<String>) -> Self {
        Self {
            created: AuditStamp::now(actor),
            last_modified: None,
        }
    }

    /// Record an update by `actor`. The creation stamp is immutable.
    pub fn touch(&mut self, actor: impl Into<String>) {
        self.last_modified = Some(AuditStamp::now(actor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_preserves_creation_stamp() {
        let mut audit = Audit::created_by(SYSTEM_ACTOR);
        let created = audit.created.clone();

        audit.touch("carol");

        assert_eq!(audit.created, created);
        assert_eq!(audit.last_modified.as_ref().unwrap().actor, "carol");
    }

    #[test]
    fn system_actor_is_never_empty() {
        assert!(!SYSTEM_ACTOR.is_empty());
        let audit = Audit::created_by(SYSTEM_ACTOR);
        assert_eq!(audit.created.actor, "SIGNUP-PROCESS");
    }
}
