use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::forum_post::{ForumCategory, ForumPost, ForumReply};
use hipis_core::models::user::User;
use hipis_storage::docs;
use hipis_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ForumQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: Option<ForumCategory>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub anonymous: Option<bool>,
}

#[derive(Deserialize)]
pub struct ReplyPayload {
    pub content: String,
    pub anonymous: Option<bool>,
}

/// Resolve the display name for a non-anonymous author. Falls back to
/// "Member" when the user document is missing.
async fn author_name(state: &AppState, user_id: Uuid) -> Result<String, ApiError> {
    match docs::load::<User>(&state.s3, &state.bucket, &doc_keys::user(user_id)).await {
        Ok((user, _)) => Ok(user.name),
        Err(StorageError::NotFound { .. }) => Ok("Member".to_string()),
        Err(err) => Err(err.into()),
    }
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ForumQuery>,
) -> Result<Json<Envelope<Vec<ForumPost>>>, ApiError> {
    let mut posts: Vec<ForumPost> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::FORUM_POSTS_PREFIX).await?;

    if let Some(category) = query.category.as_deref().filter(|c| *c != "all" && !c.is_empty()) {
        posts.retain(|p| p.category.as_str() == category);
    }

    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        let needle = q.to_lowercase();
        posts.retain(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        });
    }

    match query.sort.as_deref() {
        Some("popular") => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
        Some("active") => posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        _ => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    Ok(Json(Envelope::ok(posts)))
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<Envelope<ForumPost>>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title must not be empty".to_string()));
    }
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "content must not be empty".to_string(),
        ));
    }

    let anonymous = payload.anonymous.unwrap_or(true);
    let author = if anonymous {
        "Anonymous".to_string()
    } else {
        author_name(&state, identity.user_id).await?
    };

    let now = jiff::Timestamp::now();
    let post = ForumPost {
        id: Uuid::new_v4(),
        title: payload.title,
        content: payload.content,
        category: payload.category.unwrap_or(ForumCategory::Stress),
        tags: payload.tags,
        anonymous,
        author_id: Some(identity.user_id),
        author_name: author,
        likes: 0,
        views: 1,
        replies: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    let key = doc_keys::forum_post(post.id);
    docs::save(&state.s3, &state.bucket, &key, &post).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(post))))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ForumPost>>, ApiError> {
    let key = doc_keys::forum_post(id);
    let (mut post, etag) = docs::load::<ForumPost>(&state.s3, &state.bucket, &key).await?;

    post.likes += 1;
    docs::save_if_match(&state.s3, &state.bucket, &key, &post, &etag).await?;

    Ok(Json(Envelope::ok(post)))
}

pub async fn add_reply(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplyPayload>,
) -> Result<Json<Envelope<ForumPost>>, ApiError> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "content must not be empty".to_string(),
        ));
    }

    let anonymous = payload.anonymous.unwrap_or(true);
    let author = if anonymous {
        "Anonymous".to_string()
    } else {
        author_name(&state, identity.user_id).await?
    };

    let key = doc_keys::forum_post(id);
    let (mut post, etag) = docs::load::<ForumPost>(&state.s3, &state.bucket, &key).await?;

    let now = jiff::Timestamp::now();
    post.replies.push(ForumReply {
        content: payload.content,
        author_name: author,
        anonymous,
        user_id: Some(identity.user_id),
        created_at: now,
    });
    post.updated_at = now;

    docs::save_if_match(&state.s3, &state.bucket, &key, &post, &etag).await?;

    Ok(Json(Envelope::ok(post)))
}

pub async fn increment_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ForumPost>>, ApiError> {
    let key = doc_keys::forum_post(id);
    let (mut post, etag) = docs::load::<ForumPost>(&state.s3, &state.bucket, &key).await?;

    post.views += 1;
    docs::save_if_match(&state.s3, &state.bucket, &key, &post, &etag).await?;

    Ok(Json(Envelope::ok(post)))
}
