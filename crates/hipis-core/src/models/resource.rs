use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResourceCategory {
    Stress,
    Anxiety,
    Depression,
    Sleep,
    Academic,
    Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResourceType {
    Video,
    Article,
    Audio,
    Infographic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    En,
    Hi,
}

/// A self-help library item (article, video, audio, or infographic).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub language: Language,
    pub icon: String,
    pub duration: Option<String>,
    pub likes: u32,
    pub views: u32,
    pub content: String,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub published_date: String,
    pub created_at: jiff::Timestamp,
}
