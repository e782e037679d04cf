use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: jiff::Timestamp,
}
