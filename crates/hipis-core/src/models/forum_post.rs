use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ForumCategory {
    Stress,
    Anxiety,
    Depression,
    Academic,
    Sleep,
    Motivation,
    Other,
}

impl ForumCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumCategory::Stress => "stress",
            ForumCategory::Anxiety => "anxiety",
            ForumCategory::Depression => "depression",
            ForumCategory::Academic => "academic",
            ForumCategory::Sleep => "sleep",
            ForumCategory::Motivation => "motivation",
            ForumCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumReply {
    pub content: String,
    pub author_name: String,
    pub anonymous: bool,
    pub user_id: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}

/// A peer-support post. Replies are embedded: a post and its thread form one
/// document, so reply appends stay within a single write.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub tags: Vec<String>,
    pub anonymous: bool,
    pub author_id: Option<Uuid>,
    pub author_name: String,
    pub likes: u32,
    pub views: u32,
    pub replies: Vec<ForumReply>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
