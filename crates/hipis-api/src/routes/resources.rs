use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::resource::{Language, Resource, ResourceCategory, ResourceType};
use hipis_storage::docs;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ResourcePayload {
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub language: Language,
    pub icon: Option<String>,
    pub duration: Option<String>,
    pub content: String,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub published_date: String,
}

#[derive(Deserialize)]
pub struct LikePayload {
    pub increment: Option<bool>,
}

pub async fn list_resources(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Resource>>>, ApiError> {
    let mut resources: Vec<Resource> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::RESOURCES_PREFIX).await?;
    resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(Envelope::ok(resources)))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Resource>>, ApiError> {
    let (resource, _) =
        docs::load::<Resource>(&state.s3, &state.bucket, &doc_keys::resource(id)).await?;

    Ok(Json(Envelope::ok(resource)))
}

pub async fn create_resource(
    State(state): State<AppState>,
    Json(payload): Json<ResourcePayload>,
) -> Result<(StatusCode, Json<Envelope<Resource>>), ApiError> {
    for (value, field) in [
        (&payload.title, "title"),
        (&payload.description, "description"),
        (&payload.content, "content"),
        (&payload.author, "author"),
        (&payload.published_date, "published_date"),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::BadRequest(format!("{field} must not be empty")));
        }
    }

    let resource = Resource {
        id: Uuid::new_v4(),
        title: payload.title,
        description: payload.description,
        category: payload.category,
        kind: payload.kind,
        language: payload.language,
        icon: payload.icon.unwrap_or_else(|| "📚".to_string()),
        duration: payload.duration,
        likes: 0,
        views: 0,
        content: payload.content,
        video_url: payload.video_url,
        audio_url: payload.audio_url,
        image_url: payload.image_url,
        author: payload.author,
        published_date: payload.published_date,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::resource(resource.id);
    docs::save(&state.s3, &state.bucket, &key, &resource).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(resource))))
}

/// Adjust a resource's like count. Decrements floor at zero.
pub async fn update_likes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LikePayload>,
) -> Result<Json<Envelope<Resource>>, ApiError> {
    let key = doc_keys::resource(id);
    let (mut resource, etag) = docs::load::<Resource>(&state.s3, &state.bucket, &key).await?;

    if payload.increment.unwrap_or(true) {
        resource.likes += 1;
    } else {
        resource.likes = resource.likes.saturating_sub(1);
    }

    docs::save_if_match(&state.s3, &state.bucket, &key, &resource, &etag).await?;

    Ok(Json(Envelope::ok(resource)))
}
