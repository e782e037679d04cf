use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use hipis_auth::policy::can_access;
use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::notification::Notification;
use hipis_storage::docs;

use crate::error::ApiError;
use crate::state::AppState;

/// List a user's notifications, newest first, capped at 50.
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<Notification>>>, ApiError> {
    if !can_access(&identity, user_id, None) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let mut notifications: Vec<Notification> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::NOTIFICATIONS_PREFIX).await?;
    notifications.retain(|n| n.user_id == user_id);
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notifications.truncate(50);

    Ok(Json(Envelope::ok(notifications)))
}

/// Mark every unread notification for a user as read.
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    if !can_access(&identity, user_id, None) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let notifications: Vec<Notification> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::NOTIFICATIONS_PREFIX).await?;

    for mut notification in notifications {
        if notification.user_id == user_id && !notification.read {
            notification.read = true;
            let key = doc_keys::notification(notification.id);
            docs::save(&state.s3, &state.bucket, &key, &notification).await?;
        }
    }

    Ok(Json(Envelope::empty()))
}

/// Mark one notification as read.
pub async fn mark_one_read(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Notification>>, ApiError> {
    let key = doc_keys::notification(id);
    let (mut notification, _) =
        docs::load::<Notification>(&state.s3, &state.bucket, &key).await?;

    if !can_access(&identity, notification.user_id, None) {
        return Err(ApiError::not_found());
    }

    notification.read = true;
    docs::save(&state.s3, &state.bucket, &key, &notification).await?;

    Ok(Json(Envelope::ok(notification)))
}
