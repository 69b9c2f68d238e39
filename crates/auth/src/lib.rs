//! `portero-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage engines:
//! tokens, passwords, principals, the authorization guard and the auditor
//! all live here; the HTTP pipeline in `portero-api` only wires them up.

pub mod auditor;
pub mod authorize;
pub mod context;
pub mod error;
pub mod password;
pub mod principal;
pub mod resolver;
pub mod roles;
pub mod service;
pub mod store;
pub mod token;

pub use auditor::current_actor;
pub use authorize::require_any_role;
pub use context::SecurityContext;
pub use error::AuthError;
pub use password::{hash_password, validate_password, verify_password};
pub use principal::{Principal, UserRecord};
pub use resolver::PrincipalResolver;
pub use roles::{Role, validate_role_names};
pub use service::{AuthService, SignupRequest};
pub use store::{CredentialStore, MemoryCredentialStore};
pub use token::{Claims, KeyTooShort, TokenService};
