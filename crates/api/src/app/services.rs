//! Service construction and wiring.

use std::collections::BTreeSet;
use std::sync::Arc;

use portero_auth::{
    AuthError, AuthService, CredentialStore, KeyTooShort, MemoryCredentialStore,
    PrincipalResolver, Role, TokenService, UserRecord, hash_password, validate_password,
};
use portero_core::{Audit, SYSTEM_ACTOR, Subject};

/// Everything the handlers need, built once at startup and shared.
pub struct AppServices {
    pub store: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenService>,
    pub auth: AuthService,
    pub resolver: PrincipalResolver,
}

impl AppServices {
    /// Wire services around an in-memory credential store.
    ///
    /// A bad signing secret propagates out so startup aborts before any
    /// request is served.
    pub fn build(secret: &[u8], token_lifetime_secs: u64) -> Result<Self, KeyTooShort> {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        Ok(Self {
            tokens: Arc::new(TokenService::new(secret, token_lifetime_secs)?),
            auth: AuthService::new(store.clone()),
            resolver: PrincipalResolver::new(store.clone()),
            store,
        })
    }

    /// Seed an administrator account (startup bootstrap; there is no other
    /// way to obtain `ROLE_ADMIN` since signup only ever grants the default
    /// role).
    pub fn seed_admin(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if self.store.find_by_subject(username, true).is_some() {
            return Err(AuthError::AlreadyExists);
        }
        validate_password(password)?;

        self.store.save(UserRecord {
            subject: Subject::new(username),
            full_name: username.to_string(),
            password_hash: hash_password(password)?,
            roles: BTreeSet::from([Role::User, Role::Admin]),
            audit: Audit::created_by(SYSTEM_ACTOR),
        });

        tracing::info!(username, "seeded administrator account");
        Ok(())
    }
}
