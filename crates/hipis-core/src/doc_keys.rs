//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of documents in the HIPIS bucket: one prefix per collection, one
//! JSON document per record.

use uuid::Uuid;

pub const USERS_PREFIX: &str = "users/";

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

/// Pointer document mapping a (lowercased) email to its user id, so login
/// does not have to scan the users collection.
pub fn user_email(email: &str) -> String {
    format!("user-emails/{}.json", email.trim().to_lowercase())
}

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("assessments/{id}.json")
}

pub const APPOINTMENTS_PREFIX: &str = "appointments/";

pub fn appointment(id: Uuid) -> String {
    format!("appointments/{id}.json")
}

pub const MOOD_ENTRIES_PREFIX: &str = "mood-entries/";

pub fn mood_entry(id: Uuid) -> String {
    format!("mood-entries/{id}.json")
}

pub const FORUM_POSTS_PREFIX: &str = "forum-posts/";

pub fn forum_post(id: Uuid) -> String {
    format!("forum-posts/{id}.json")
}

pub const RESOURCES_PREFIX: &str = "resources/";

pub fn resource(id: Uuid) -> String {
    format!("resources/{id}.json")
}

pub const COMMENTS_PREFIX: &str = "comments/";

pub fn comment(id: Uuid) -> String {
    format!("comments/{id}.json")
}

pub const NOTIFICATIONS_PREFIX: &str = "notifications/";

pub fn notification(id: Uuid) -> String {
    format!("notifications/{id}.json")
}

pub const CONTACT_REQUESTS_PREFIX: &str = "contact-requests/";

pub fn contact_request(id: Uuid) -> String {
    format!("contact-requests/{id}.json")
}

pub const COUNSELLOR_CLIENTS_PREFIX: &str = "counsellor-clients/";

pub fn counsellor_client(id: Uuid) -> String {
    format!("counsellor-clients/{id}.json")
}

pub const COUNSELLOR_NOTES_PREFIX: &str = "counsellor-notes/";

pub fn counsellor_note(id: Uuid) -> String {
    format!("counsellor-notes/{id}.json")
}
