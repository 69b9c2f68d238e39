//! Login/signup orchestration over the credential store.

use std::collections::BTreeSet;
use std::sync::Arc;

use portero_core::{Audit, SYSTEM_ACTOR, Subject};

use crate::{
    AuthError, CredentialStore, Principal, Role, UserRecord, hash_password, validate_password,
    verify_password,
};

/// Registration input.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

/// Validates credentials and delegates persistence to the credential store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Register a new principal.
    ///
    /// Fails with [`AuthError::AlreadyExists`] when the username is taken
    /// (case-insensitive) and [`AuthError::WeakPassword`] when the complexity
    /// policy is violated. The stored record gets the default role and is
    /// audit-stamped with the system actor: no security context exists yet at
    /// this point.
    pub fn signup(&self, request: SignupRequest) -> Result<UserRecord, AuthError> {
        if self
            .store
            .find_by_subject(&request.username, true)
            .is_some()
        {
            return Err(AuthError::AlreadyExists);
        }

        validate_password(&request.password)?;

        let record = UserRecord {
            subject: Subject::new(request.username),
            full_name: request.full_name,
            password_hash: hash_password(&request.password)?,
            roles: BTreeSet::from([Role::DEFAULT]),
            audit: Audit::created_by(SYSTEM_ACTOR),
        };

        let stored = self.store.save(record);
        tracing::info!(subject = %stored.subject, "user signed up");
        Ok(stored)
    }

    /// Verify a username/password pair.
    ///
    /// Missing user and wrong password collapse into the same
    /// [`AuthError::AuthenticationFailed`]: the caller learns nothing about
    /// which half was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let Some(record) = self.store.find_by_subject(username, true) else {
            tracing::debug!(username, "authentication failed: unknown user");
            return Err(AuthError::AuthenticationFailed);
        };

        if !verify_password(password, &record.password_hash) {
            tracing::debug!(username, "authentication failed: password mismatch");
            return Err(AuthError::AuthenticationFailed);
        }

        tracing::debug!(username, "user authenticated successfully");
        Ok(Principal::from_record(&record))
    }
}
