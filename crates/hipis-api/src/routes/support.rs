use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::contact_request::{ContactRequest, ContactStatus};
use hipis_core::models::user::User;
use hipis_storage::docs;
use hipis_storage::error::StorageError;

use crate::error::ApiError;
use crate::notify::notify;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContactPayload {
    pub message: Option<String>,
    pub source: Option<String>,
}

/// Raise a "connect me with a counsellor" request for the calling user and
/// acknowledge it with a notification.
pub async fn create_contact_request(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<Envelope<ContactRequest>>), ApiError> {
    if payload.message.as_deref().is_some_and(|m| m.len() > 500) {
        return Err(ApiError::BadRequest(
            "message must be at most 500 characters".to_string(),
        ));
    }

    // Fill in display fields from the user record when it exists; the
    // request is still valid without them.
    let (name, email) = match docs::load::<User>(
        &state.s3,
        &state.bucket,
        &doc_keys::user(identity.user_id),
    )
    .await
    {
        Ok((user, _)) => (user.name, user.email),
        Err(StorageError::NotFound { .. }) => (String::new(), identity.email.clone()),
        Err(err) => return Err(err.into()),
    };

    let request = ContactRequest {
        id: Uuid::new_v4(),
        user_id: identity.user_id,
        name,
        email,
        source: payload.source.unwrap_or_else(|| "assessments".to_string()),
        message: payload
            .message
            .unwrap_or_else(|| "Please connect me with a counselor".to_string()),
        status: ContactStatus::Open,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::contact_request(request.id);
    docs::save(&state.s3, &state.bucket, &key, &request).await?;

    notify(
        &state,
        identity.user_id,
        "Counselor request received",
        "We'll connect you to a counselor shortly.",
        "support",
        "/assessments",
    )
    .await;

    Ok((StatusCode::CREATED, Json(Envelope::ok(request))))
}
