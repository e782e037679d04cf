use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The three supported screening questionnaires. Wire values match the
/// labels shown to users ("PHQ-9", "GAD-7", "GHQ-12").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionnaireKind {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
    #[serde(rename = "GHQ-12")]
    Ghq12,
}

impl QuestionnaireKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionnaireKind::Phq9 => "PHQ-9",
            QuestionnaireKind::Gad7 => "GAD-7",
            QuestionnaireKind::Ghq12 => "GHQ-12",
        }
    }
}

/// A completed screening, scored server-side. Immutable once written: there
/// is no edit or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: QuestionnaireKind,
    pub score: u32,
    pub severity: String,
    pub interpretation: String,
    pub recommendations: Vec<String>,
    pub answers: Vec<u8>,
    pub created_at: jiff::Timestamp,
}
