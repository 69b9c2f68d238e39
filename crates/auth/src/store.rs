//! Credential store contract and the in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::UserRecord;

/// Collaborator interface consumed by the auth core.
///
/// The store is its own synchronization domain; callers never hold
/// cross-request locks around these calls, each of which is a single lookup
/// or write.
pub trait CredentialStore: Send + Sync {
    /// Look a record up by subject. With `case_insensitive` the match ignores
    /// ASCII case, which is how every auth-path lookup behaves.
    fn find_by_subject(&self, subject: &str, case_insensitive: bool) -> Option<UserRecord>;

    /// Persist (insert or replace) a record, returning the stored copy.
    fn save(&self, record: UserRecord) -> UserRecord;

    /// Remove a record. Deletion is a collaborator concern (admin tooling);
    /// the auth core itself never deletes.
    fn delete(&self, subject: &str) -> bool;
}

/// `RwLock<HashMap>`-backed store keyed by the lowercased subject.
#[derive(Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn find_by_subject(&self, subject: &str, case_insensitive: bool) -> Option<UserRecord> {
        let records = self.records.read().expect("credential store lock poisoned");
        let record = records.get(&subject.to_ascii_lowercase())?;
        if case_insensitive || record.subject.as_str() == subject {
            Some(record.clone())
        } else {
            None
        }
    }

    fn save(&self, record: UserRecord) -> UserRecord {
        let mut records = self.records.write().expect("credential store lock poisoned");
        records.insert(record.subject.normalized(), record.clone());
        record
    }

    fn delete(&self, subject: &str) -> bool {
        let mut records = self.records.write().expect("credential store lock poisoned");
        records.remove(&subject.to_ascii_lowercase()).is_some()
    }
}
