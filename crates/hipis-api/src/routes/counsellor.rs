use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::appointment::Appointment;
use hipis_core::models::counsellor_client::{ClientStatus, CounsellorClient, PrimaryIssue};
use hipis_core::models::counsellor_note::{CounsellorNote, NoteMood};
use hipis_core::models::user::{Role, User, UserProfile};
use hipis_storage::docs;
use hipis_storage::error::StorageError;

use crate::demo;
use crate::error::ApiError;
use crate::state::AppState;

/// A caseload relationship joined with the client's profile.
#[derive(Serialize)]
pub struct ClientView {
    #[serde(flatten)]
    pub record: CounsellorClient,
    pub client: Option<UserProfile>,
}

/// An appointment joined with the student's profile.
#[derive(Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub student: Option<UserProfile>,
}

/// A session note joined with the client's profile.
#[derive(Serialize)]
pub struct NoteView {
    #[serde(flatten)]
    pub note: CounsellorNote,
    pub client: Option<UserProfile>,
}

#[derive(Serialize)]
pub struct ClientDetails {
    #[serde(flatten)]
    pub record: CounsellorClient,
    pub client: Option<UserProfile>,
    /// Session notes, newest first. Named apart from the relationship's own
    /// free-text `notes` field, which the flatten above already emits.
    pub session_notes: Vec<CounsellorNote>,
}

#[derive(Serialize)]
pub struct CounsellorStats {
    pub active_clients: usize,
    pub todays_sessions: usize,
    pub this_week_sessions: usize,
    pub completion_rate: u32,
}

#[derive(Deserialize)]
pub struct NotePayload {
    pub client_id: Uuid,
    pub content: String,
    pub follow_up: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub mood: Option<NoteMood>,
}

#[derive(Deserialize)]
pub struct AddClientPayload {
    pub client_id: Uuid,
    pub primary_issue: PrimaryIssue,
}

pub(crate) async fn load_profile(
    state: &AppState,
    id: Uuid,
) -> Result<Option<UserProfile>, ApiError> {
    match docs::load::<User>(&state.s3, &state.bucket, &doc_keys::user(id)).await {
        Ok((user, _)) => Ok(Some(user.profile())),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

async fn caseload(state: &AppState, counsellor_id: Uuid) -> Result<Vec<CounsellorClient>, ApiError> {
    let mut records: Vec<CounsellorClient> = docs::load_all(
        &state.s3,
        &state.bucket,
        doc_keys::COUNSELLOR_CLIENTS_PREFIX,
    )
    .await?;
    records.retain(|r| r.counsellor_id == counsellor_id);
    Ok(records)
}

async fn counsellor_appointments(
    state: &AppState,
    counsellor_id: Uuid,
) -> Result<Vec<Appointment>, ApiError> {
    let mut appointments: Vec<Appointment> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;
    appointments.retain(|a| a.counsellor == counsellor_id);
    Ok(appointments)
}

fn week_bounds(today: jiff::civil::Date) -> Result<(jiff::civil::Date, jiff::civil::Date), ApiError> {
    let offset = i64::from(today.weekday().to_sunday_zero_offset());
    let start = today
        .checked_sub(jiff::Span::new().days(offset))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let end = start
        .checked_add(jiff::Span::new().days(7))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((start, end))
}

/// The calling counsellor's caseload, most recent first.
pub async fn get_clients(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<Vec<ClientView>>>, ApiError> {
    let mut records = caseload(&state, identity.user_id).await?;
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if records.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::counsellor_clients(
            identity.user_id,
        ))));
    }

    let mut views = Vec::with_capacity(records.len());
    for record in records {
        let client = load_profile(&state, record.client_id).await?;
        views.push(ClientView { record, client });
    }

    Ok(Json(Envelope::ok(views)))
}

/// One client's relationship record plus their session notes, newest first.
pub async fn get_client_details(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Envelope<ClientDetails>>, ApiError> {
    let record = caseload(&state, identity.user_id)
        .await?
        .into_iter()
        .find(|r| r.client_id == client_id)
        .ok_or_else(|| ApiError::NotFound("Client not found".to_string()))?;

    let client = load_profile(&state, record.client_id).await?;

    let mut notes: Vec<CounsellorNote> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::COUNSELLOR_NOTES_PREFIX).await?;
    notes.retain(|n| n.counsellor_id == identity.user_id && n.client_id == client_id);
    notes.sort_by(|a, b| b.session_date.cmp(&a.session_date));

    Ok(Json(Envelope::ok(ClientDetails {
        record,
        client,
        session_notes: notes,
    })))
}

/// Today's appointments for the calling counsellor, earliest first.
pub async fn todays_appointments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<Vec<AppointmentView>>>, ApiError> {
    let today = jiff::Zoned::now().date();

    let mut appointments = counsellor_appointments(&state, identity.user_id).await?;
    appointments.retain(|a| a.date == today);
    appointments.sort_by(|a, b| a.time.cmp(&b.time));

    if appointments.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::todays_appointments(
            identity.user_id,
            today,
        ))));
    }

    let mut views = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        let student = load_profile(&state, appointment.user_id).await?;
        views.push(AppointmentView {
            appointment,
            student,
        });
    }

    Ok(Json(Envelope::ok(views)))
}

/// The next seven days of appointments for the calling counsellor.
pub async fn upcoming_appointments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<Vec<AppointmentView>>>, ApiError> {
    let today = jiff::Zoned::now().date();
    let horizon = today
        .checked_add(jiff::Span::new().days(7))
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut appointments = counsellor_appointments(&state, identity.user_id).await?;
    appointments.retain(|a| a.date >= today && a.date < horizon);
    appointments.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));

    if appointments.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::upcoming_appointments(
            identity.user_id,
            today,
        ))));
    }

    let mut views = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        let student = load_profile(&state, appointment.user_id).await?;
        views.push(AppointmentView {
            appointment,
            student,
        });
    }

    Ok(Json(Envelope::ok(views)))
}

/// Write a session note. Requires an established counsellor-client
/// relationship; also stamps the relationship's last session date.
pub async fn create_note(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<Envelope<CounsellorNote>>), ApiError> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "content must not be empty".to_string(),
        ));
    }

    let mut relationship = caseload(&state, identity.user_id)
        .await?
        .into_iter()
        .find(|r| r.client_id == payload.client_id)
        .ok_or_else(|| {
            ApiError::Forbidden("You do not have access to this client".to_string())
        })?;

    let now = jiff::Timestamp::now();
    let note = CounsellorNote {
        id: Uuid::new_v4(),
        counsellor_id: identity.user_id,
        client_id: payload.client_id,
        content: payload.content,
        session_date: now,
        follow_up: payload.follow_up.unwrap_or_default(),
        key_points: payload.key_points,
        mood: payload.mood.unwrap_or(NoteMood::Stable),
        created_at: now,
    };

    let note_key = doc_keys::counsellor_note(note.id);
    docs::save(&state.s3, &state.bucket, &note_key, &note).await?;

    relationship.last_session_date = Some(now);
    relationship.updated_at = now;
    let rel_key = doc_keys::counsellor_client(relationship.id);
    docs::save(&state.s3, &state.bucket, &rel_key, &relationship).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(note))))
}

/// The ten most recent session notes for the calling counsellor.
pub async fn recent_notes(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<Vec<NoteView>>>, ApiError> {
    let mut notes: Vec<CounsellorNote> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::COUNSELLOR_NOTES_PREFIX).await?;
    notes.retain(|n| n.counsellor_id == identity.user_id);
    notes.sort_by(|a, b| b.session_date.cmp(&a.session_date));
    notes.truncate(10);

    if notes.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::recent_notes(identity.user_id))));
    }

    let mut views = Vec::with_capacity(notes.len());
    for note in notes {
        let client = load_profile(&state, note.client_id).await?;
        views.push(NoteView { note, client });
    }

    Ok(Json(Envelope::ok(views)))
}

/// Caseload and session counters for the counsellor dashboard.
pub async fn stats(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<CounsellorStats>>, ApiError> {
    let records = caseload(&state, identity.user_id).await?;
    let active = records
        .iter()
        .filter(|r| r.status == ClientStatus::Active)
        .count();
    let completed = records
        .iter()
        .filter(|r| r.status == ClientStatus::Completed)
        .count();

    let today = jiff::Zoned::now().date();
    let (week_start, week_end) = week_bounds(today)?;

    let appointments = counsellor_appointments(&state, identity.user_id).await?;
    let todays = appointments.iter().filter(|a| a.date == today).count();
    let this_week = appointments
        .iter()
        .filter(|a| a.date >= week_start && a.date < week_end)
        .count();

    let closed_or_open = active + completed;
    let completion_rate = if closed_or_open > 0 {
        ((completed as f64 / closed_or_open as f64) * 100.0).round() as u32
    } else {
        0
    };

    let mut stats = CounsellorStats {
        active_clients: active,
        todays_sessions: todays,
        this_week_sessions: this_week,
        completion_rate,
    };

    if state.demo {
        demo::counsellor_stats_floor(&mut stats);
    }

    Ok(Json(Envelope::ok(stats)))
}

/// Add a student to the calling counsellor's caseload.
pub async fn add_client(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Json(payload): Json<AddClientPayload>,
) -> Result<(StatusCode, Json<Envelope<CounsellorClient>>), ApiError> {
    let client = match docs::load::<User>(
        &state.s3,
        &state.bucket,
        &doc_keys::user(payload.client_id),
    )
    .await
    {
        Ok((user, _)) if user.role == Role::Student => user,
        Ok(_) | Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound("Client not found".to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let already = caseload(&state, identity.user_id)
        .await?
        .into_iter()
        .any(|r| r.client_id == client.id);
    if already {
        return Err(ApiError::BadRequest("Client already added".to_string()));
    }

    let now = jiff::Timestamp::now();
    let record = CounsellorClient {
        id: Uuid::new_v4(),
        counsellor_id: identity.user_id,
        client_id: client.id,
        primary_issue: payload.primary_issue,
        status: ClientStatus::Active,
        start_date: now,
        last_session_date: None,
        notes: String::new(),
        created_at: now,
        updated_at: now,
    };

    let key = doc_keys::counsellor_client(record.id);
    docs::save(&state.s3, &state.bucket, &key, &record).await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(record))))
}
