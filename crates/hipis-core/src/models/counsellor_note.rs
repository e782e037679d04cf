use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NoteMood {
    Stable,
    Improved,
    Declined,
    Crisis,
}

/// A session note written by a counsellor about one of their clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CounsellorNote {
    pub id: Uuid,
    pub counsellor_id: Uuid,
    pub client_id: Uuid,
    pub content: String,
    pub session_date: jiff::Timestamp,
    pub follow_up: String,
    pub key_points: Vec<String>,
    pub mood: NoteMood,
    pub created_at: jiff::Timestamp,
}
