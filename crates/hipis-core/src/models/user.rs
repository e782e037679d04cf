use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Student,
    Counsellor,
    Admin,
}

/// Stored user document. Carries the password hash; never serialize this to
/// a client, use [`UserProfile`] for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub university: String,
    pub active: bool,
    pub assigned_counsellor: Option<Uuid>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Client-facing view of a user, without credentials.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub university: String,
    pub active: bool,
    pub assigned_counsellor: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}

/// Pointer document mapping a lowercased email to its user id; see
/// [`crate::doc_keys::user_email`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailIndex {
    pub user_id: Uuid,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            university: self.university.clone(),
            active: self.active,
            assigned_counsellor: self.assigned_counsellor,
            created_at: self.created_at,
        }
    }
}
