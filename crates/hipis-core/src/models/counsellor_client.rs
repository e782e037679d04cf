use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PrimaryIssue {
    Anxiety,
    Depression,
    Stress,
    #[serde(rename = "Family Issues")]
    FamilyIssues,
    #[serde(rename = "Sleep Issues")]
    SleepIssues,
    Academic,
    Relationship,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClientStatus {
    Active,
    Completed,
    Paused,
}

/// The counsellor–student caseload relationship. Session notes require this
/// record to exist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CounsellorClient {
    pub id: Uuid,
    pub counsellor_id: Uuid,
    pub client_id: Uuid,
    pub primary_issue: PrimaryIssue,
    pub status: ClientStatus,
    pub start_date: jiff::Timestamp,
    pub last_session_date: Option<jiff::Timestamp>,
    pub notes: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
