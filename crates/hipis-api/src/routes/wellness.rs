use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use hipis_auth::policy::can_access;
use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::mood_entry::MoodEntry;
use hipis_storage::{docs, objects};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MoodEntryPayload {
    pub date: jiff::civil::Date,
    pub mood: String,
    pub stress: u8,
    pub sleep: f32,
    pub energy: u8,
    #[serde(default)]
    pub exercise: bool,
    #[serde(default)]
    pub notes: String,
}

fn validate(payload: &MoodEntryPayload) -> Result<(), ApiError> {
    if payload.mood.trim().is_empty() {
        return Err(ApiError::BadRequest("mood must not be empty".to_string()));
    }
    if !(1..=10).contains(&payload.stress) {
        return Err(ApiError::BadRequest(
            "stress must be between 1 and 10".to_string(),
        ));
    }
    if !(0.0..=24.0).contains(&payload.sleep) {
        return Err(ApiError::BadRequest(
            "sleep must be between 0 and 24 hours".to_string(),
        ));
    }
    if !(1..=10).contains(&payload.energy) {
        return Err(ApiError::BadRequest(
            "energy must be between 1 and 10".to_string(),
        ));
    }
    Ok(())
}

/// List a user's mood entries, newest first.
pub async fn list_mood_entries(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<MoodEntry>>>, ApiError> {
    if !can_access(&identity, user_id, None) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let mut entries: Vec<MoodEntry> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::MOOD_ENTRIES_PREFIX).await?;
    entries.retain(|e| e.user_id == user_id);
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(Envelope::ok(entries)))
}

pub async fn create_mood_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<MoodEntryPayload>,
) -> Result<(StatusCode, Json<Envelope<MoodEntry>>), ApiError> {
    validate(&payload)?;

    let entry = MoodEntry {
        id: Uuid::new_v4(),
        user_id: identity.user_id,
        date: payload.date,
        mood: payload.mood,
        stress: payload.stress,
        sleep: payload.sleep,
        energy: payload.energy,
        exercise: payload.exercise,
        notes: payload.notes,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::mood_entry(entry.id);
    docs::save(&state.s3, &state.bucket, &key, &entry).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(entry))))
}

/// Delete one mood entry. Mood entries have no counsellor party: only the
/// owner or an admin may delete, and denial is indistinguishable from a
/// missing record.
pub async fn delete_mood_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let key = doc_keys::mood_entry(id);
    let (entry, _) = docs::load::<MoodEntry>(&state.s3, &state.bucket, &key).await?;

    if !can_access(&identity, entry.user_id, None) {
        return Err(ApiError::not_found());
    }

    objects::delete_object(&state.s3, &state.bucket, &key).await?;

    Ok(Json(Envelope::accepted("Mood entry deleted")))
}
