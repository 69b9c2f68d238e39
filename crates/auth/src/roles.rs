use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Closed enumeration of RBAC roles.
///
/// Tokens and the security context reference roles by name only; this enum is
/// the single source of truth for which names are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Role granted to every freshly signed-up principal.
    pub const DEFAULT: Role = Role::User;

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Parse a single role name (case-insensitive).
    pub fn parse(name: &str) -> Option<Role> {
        match name.to_ascii_uppercase().as_str() {
            "ROLE_USER" => Some(Role::User),
            "ROLE_ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a set of submitted role names against the known enumeration.
///
/// Fails with [`AuthError::InvalidRoleName`] listing every unknown name, so a
/// caller fixing their request sees all offenders at once.
pub fn validate_role_names<'a, I>(names: I) -> Result<BTreeSet<Role>, AuthError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut roles = BTreeSet::new();
    let mut invalid = Vec::new();

    for name in names {
        match Role::parse(name) {
            Some(role) => {
                roles.insert(role);
            }
            None => invalid.push(name.to_string()),
        }
    }

    if invalid.is_empty() {
        Ok(roles)
    } else {
        Err(AuthError::InvalidRoleName(invalid.join(", ")))
    }
}
