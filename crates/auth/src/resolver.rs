use std::sync::Arc;

use crate::{AuthError, CredentialStore, Principal};

/// Loads a principal for a token subject.
///
/// Resolution failure is [`AuthError::PrincipalNotFound`], which is *not* an
/// authentication failure: the login path never uses this error, so it can
/// never leak which half of a credential pair was wrong.
#[derive(Clone)]
pub struct PrincipalResolver {
    store: Arc<dyn CredentialStore>,
}

impl PrincipalResolver {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Case-insensitive lookup of a live principal.
    pub fn resolve(&self, subject: &str) -> Result<Principal, AuthError> {
        tracing::debug!(subject, "resolving principal");
        match self.store.find_by_subject(subject, true) {
            Some(record) => Ok(Principal::from_record(&record)),
            None => {
                tracing::debug!(subject, "no principal for subject");
                Err(AuthError::PrincipalNotFound(subject.to_string()))
            }
        }
    }
}
