use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One daily wellness check-in. `stress` and `energy` are 1–10 self-ratings,
/// `sleep` is hours (fractional allowed).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: jiff::civil::Date,
    pub mood: String,
    pub stress: u8,
    pub sleep: f32,
    pub energy: u8,
    pub exercise: bool,
    pub notes: String,
    pub created_at: jiff::Timestamp,
}
