use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::comment::Comment;
use hipis_storage::docs;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CommentPayload {
    pub resource_id: Uuid,
    pub author: String,
    pub text: String,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<Comment>>>, ApiError> {
    let mut comments: Vec<Comment> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::COMMENTS_PREFIX).await?;
    comments.retain(|c| c.resource_id == resource_id);
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(Envelope::ok(comments)))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<Envelope<Comment>>), ApiError> {
    if payload.author.trim().is_empty() {
        return Err(ApiError::BadRequest("author must not be empty".to_string()));
    }
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let comment = Comment {
        id: Uuid::new_v4(),
        resource_id: payload.resource_id,
        author: payload.author,
        text: payload.text,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::comment(comment.id);
    docs::save(&state.s3, &state.bucket, &key, &comment).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(comment))))
}
