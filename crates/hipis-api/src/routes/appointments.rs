use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use hipis_auth::policy::can_access;
use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::appointment::{
    Appointment, AppointmentStatus, AppointmentType, CancelOutcome,
};
use hipis_storage::docs;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AppointmentPayload {
    pub counsellor: Uuid,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub date: jiff::civil::Date,
    pub time: String,
}

/// List a user's appointments, soonest first.
pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<Appointment>>>, ApiError> {
    if !can_access(&identity, user_id, None) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let mut appointments: Vec<Appointment> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;
    appointments.retain(|a| a.user_id == user_id);
    appointments.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));

    Ok(Json(Envelope::ok(appointments)))
}

/// Book an appointment. The booking student is always the token identity.
pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<AppointmentPayload>,
) -> Result<(StatusCode, Json<Envelope<Appointment>>), ApiError> {
    if payload.time.trim().is_empty() {
        return Err(ApiError::BadRequest("time must not be empty".to_string()));
    }

    let now = jiff::Timestamp::now();
    let appointment = Appointment {
        id: Uuid::new_v4(),
        user_id: identity.user_id,
        counsellor: payload.counsellor,
        kind: payload.kind,
        date: payload.date,
        time: payload.time,
        status: AppointmentStatus::Upcoming,
        created_at: now,
        updated_at: now,
    };

    let key = doc_keys::appointment(appointment.id);
    docs::save(&state.s3, &state.bucket, &key, &appointment).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(appointment))))
}

/// One-way `upcoming -> cancelled` transition, allowed for the owner, the
/// counsellor party, or an admin. Cancelling twice is a no-op success.
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Appointment>>, ApiError> {
    let key = doc_keys::appointment(id);
    let (mut appointment, _) = docs::load::<Appointment>(&state.s3, &state.bucket, &key).await?;

    if !can_access(&identity, appointment.user_id, Some(appointment.counsellor)) {
        return Err(ApiError::not_found());
    }

    match appointment.cancel()? {
        CancelOutcome::Cancelled => {
            appointment.updated_at = jiff::Timestamp::now();
            docs::save(&state.s3, &state.bucket, &key, &appointment).await?;
        }
        CancelOutcome::AlreadyCancelled => {}
    }

    Ok(Json(Envelope::ok(appointment)))
}
