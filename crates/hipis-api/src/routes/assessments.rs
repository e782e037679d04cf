use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use hipis_assess::scoring;
use hipis_auth::policy::can_access;
use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::assessment::{AssessmentRecord, QuestionnaireKind};
use hipis_storage::docs;

use crate::error::ApiError;
use crate::notify::notify;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AssessmentPayload {
    #[serde(rename = "type")]
    pub kind: QuestionnaireKind,
    #[serde(default)]
    pub answers: Vec<u8>,
}

/// List a user's assessment records, newest first. The path id must satisfy
/// the ownership policy against the token identity.
pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<AssessmentRecord>>>, ApiError> {
    if !can_access(&identity, user_id, None) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let mut records: Vec<AssessmentRecord> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::ASSESSMENTS_PREFIX).await?;
    records.retain(|r| r.user_id == user_id);
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(Envelope::ok(records)))
}

/// Score a submission and persist the record. The owner is always the token
/// identity, never taken from the body. If persistence fails the scored
/// result is still returned, with a warning that it was not saved.
pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<AssessmentPayload>,
) -> Result<(StatusCode, Json<Envelope<AssessmentRecord>>), ApiError> {
    let scored = scoring::score(payload.kind, &payload.answers);

    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        user_id: identity.user_id,
        kind: payload.kind,
        score: scored.score,
        severity: scored.severity,
        interpretation: scored.interpretation,
        recommendations: scored.recommendations,
        answers: payload.answers,
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::assessment(record.id);
    match docs::save(&state.s3, &state.bucket, &key, &record).await {
        Ok(_) => {
            notify(
                &state,
                identity.user_id,
                &format!("{} assessment saved", record.kind.label()),
                &format!("Score: {}, Severity: {}", record.score, record.severity),
                "assessment",
                "/assessments",
            )
            .await;

            Ok((StatusCode::CREATED, Json(Envelope::ok(record))))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to persist assessment");
            Ok((
                StatusCode::OK,
                Json(Envelope::ok_with(
                    record,
                    "Assessment scored but could not be saved; it will not appear in your history",
                )),
            ))
        }
    }
}
