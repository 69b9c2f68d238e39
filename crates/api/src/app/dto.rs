//! Request/response DTOs and JSON mapping helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portero_auth::UserRecord;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

/// Login response: the bearer token and when it goes stale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub created_by: String,
    pub creation_date: DateTime<Utc>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl From<&UserRecord> for UserResponse {
    fn from(record: &UserRecord) -> Self {
        let last_modified = record.audit.last_modified.as_ref();
        Self {
            username: record.subject.to_string(),
            full_name: record.full_name.clone(),
            roles: record.roles.iter().map(|r| r.to_string()).collect(),
            created_by: record.audit.created.actor.clone(),
            creation_date: record.audit.created.at,
            last_modified_by: last_modified.map(|s| s.actor.clone()),
            last_modified_date: last_modified.map(|s| s.at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RolesUpdateBody {
    pub roles: Vec<String>,
}
