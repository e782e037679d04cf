use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hipis_assess::get_questionnaire;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::appointment::{Appointment, AppointmentStatus};
use hipis_core::models::assessment::AssessmentRecord;
use hipis_core::models::forum_post::ForumPost;
use hipis_core::models::mood_entry::MoodEntry;
use hipis_core::models::resource::{Resource, ResourceCategory};
use hipis_core::models::user::{Role, User, UserProfile};
use hipis_storage::docs;
use hipis_storage::error::StorageError;

use crate::demo;
use crate::error::ApiError;
use crate::routes::counsellor::{load_profile, AppointmentView};
use crate::state::AppState;

#[derive(Serialize)]
pub struct AdminStats {
    pub total_students: usize,
    pub total_counsellors: usize,
    pub total_appointments: usize,
    pub today_appointments: usize,
    pub completed_appointments: usize,
    pub pending_appointments: usize,
    pub appointment_rate: u32,
    pub cancellation_rate: u32,
    pub mood_entries: usize,
    pub resources: usize,
    pub forum_posts: usize,
    pub active_users: usize,
}

#[derive(Deserialize)]
pub struct UsersQuery {
    pub role: Option<Role>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

#[derive(Serialize)]
pub struct UsersPage {
    pub users: Vec<UserProfile>,
    pub pagination: Pagination,
}

#[derive(Serialize, Default)]
pub struct MoodDistribution {
    pub happy: u32,
    pub good: u32,
    pub neutral: u32,
    pub stressed: u32,
    pub anxious: u32,
    pub depressed: u32,
}

impl MoodDistribution {
    fn total(&self) -> u32 {
        self.happy + self.good + self.neutral + self.stressed + self.anxious + self.depressed
    }
}

#[derive(Serialize)]
pub struct WellnessMetrics {
    pub anxiety_index: f64,
    pub depression_index: f64,
    pub stress_level: f64,
    pub wellbeing_score: f64,
}

#[derive(Serialize)]
pub struct WellnessReport {
    pub mood_distribution: MoodDistribution,
    pub metrics: WellnessMetrics,
    pub total_entries: u32,
}

#[derive(Serialize)]
pub struct AppointmentAnalytics {
    pub total: usize,
    pub by_type: BTreeMap<&'static str, u32>,
    pub by_status: BTreeMap<&'static str, u32>,
    pub peak_hours: BTreeMap<u8, u32>,
    pub recent_appointments: Vec<AppointmentView>,
}

#[derive(Serialize)]
pub struct ResourceEngagement {
    pub id: Uuid,
    pub title: String,
    pub views: u32,
    pub likes: u32,
    pub category: ResourceCategory,
    pub engagement: &'static str,
}

#[derive(Serialize)]
pub struct ForumActivity {
    pub category: &'static str,
    pub posts: u32,
    pub comments: u32,
    pub engagement: &'static str,
}

#[derive(Serialize)]
pub struct RiskFlag {
    pub id: Uuid,
    pub student: String,
    pub flag: String,
    pub date: String,
    pub severity: &'static str,
    pub reviewed: bool,
}

#[derive(Serialize)]
pub struct SystemAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: &'static str,
    pub timestamp: jiff::Timestamp,
}

#[derive(Deserialize)]
pub struct StatusPayload {
    pub active: bool,
}

#[derive(Deserialize)]
pub struct AssignPayload {
    pub student_ids: Vec<Uuid>,
    pub counsellor_id: Uuid,
}

/// Parse the hour out of a "10:00 AM" style time string.
fn hour_of(time: &str) -> Option<u8> {
    let mut parts = time.split_whitespace();
    let clock = parts.next()?;
    let meridiem = parts.next();

    let hour: u8 = clock.split(':').next()?.parse().ok()?;
    match meridiem.map(str::to_ascii_uppercase).as_deref() {
        Some("PM") if hour != 12 => Some(hour + 12),
        Some("AM") if hour == 12 => Some(0),
        _ => Some(hour),
    }
}

/// Platform-wide counters for the admin dashboard.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<Envelope<AdminStats>>, ApiError> {
    let users: Vec<User> = docs::load_all(&state.s3, &state.bucket, doc_keys::USERS_PREFIX).await?;
    let appointments: Vec<Appointment> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;
    let mood_entries: Vec<MoodEntry> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::MOOD_ENTRIES_PREFIX).await?;
    let resources: Vec<Resource> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::RESOURCES_PREFIX).await?;
    let forum_posts: Vec<ForumPost> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::FORUM_POSTS_PREFIX).await?;

    let today = jiff::Zoned::now().date();
    let total_students = users.iter().filter(|u| u.role == Role::Student).count();
    let total_counsellors = users.iter().filter(|u| u.role == Role::Counsellor).count();
    let completed = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count();
    let cancelled = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Cancelled)
        .count();
    let pending = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Upcoming)
        .count();

    let rate = |part: usize, whole: usize| -> u32 {
        if whole > 0 {
            ((part as f64 / whole as f64) * 100.0).round() as u32
        } else {
            0
        }
    };

    let mut stats = AdminStats {
        total_students,
        total_counsellors,
        total_appointments: appointments.len(),
        today_appointments: appointments.iter().filter(|a| a.date == today).count(),
        completed_appointments: completed,
        pending_appointments: pending,
        appointment_rate: rate(completed, appointments.len()),
        cancellation_rate: rate(cancelled, appointments.len()),
        mood_entries: mood_entries.len(),
        resources: resources.len(),
        forum_posts: forum_posts.len(),
        active_users: total_students + total_counsellors,
    };

    if state.demo {
        demo::admin_stats_floor(&mut stats);
    }

    Ok(Json(Envelope::ok(stats)))
}

/// All users, optionally filtered by role, newest first, paginated.
/// Passwords never leave the store: only profiles are serialized.
pub async fn users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<Envelope<UsersPage>>, ApiError> {
    let mut users: Vec<User> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::USERS_PREFIX).await?;

    if let Some(role) = query.role {
        users.retain(|u| u.role == role);
    }
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = users.len();
    let limit = query.limit.unwrap_or(10).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let pages = total.div_ceil(limit);

    let profiles: Vec<UserProfile> = users
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .map(User::profile)
        .collect();

    Ok(Json(Envelope::ok(UsersPage {
        users: profiles,
        pagination: Pagination { total, page, pages },
    })))
}

/// Mood distribution and derived wellbeing indices over the latest entries.
pub async fn wellness_metrics(
    State(state): State<AppState>,
) -> Result<Json<Envelope<WellnessReport>>, ApiError> {
    let mut entries: Vec<MoodEntry> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::MOOD_ENTRIES_PREFIX).await?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries.truncate(100);

    let mut moods = MoodDistribution::default();
    for entry in &entries {
        match entry.mood.as_str() {
            "happy" => moods.happy += 1,
            "good" => moods.good += 1,
            "neutral" => moods.neutral += 1,
            "stressed" => moods.stressed += 1,
            "anxious" => moods.anxious += 1,
            "depressed" => moods.depressed += 1,
            _ => {}
        }
    }

    if moods.total() == 0 && state.demo {
        moods = demo::mood_distribution();
    }

    let total = moods.total();
    let denom = f64::from(total.max(1));
    let metrics = WellnessMetrics {
        anxiety_index: f64::from(moods.anxious) / denom * 10.0,
        depression_index: f64::from(moods.depressed) / denom * 10.0,
        stress_level: f64::from(moods.stressed + moods.anxious) / denom * 10.0,
        wellbeing_score: f64::from(moods.happy + moods.good) / denom * 10.0,
    };

    Ok(Json(Envelope::ok(WellnessReport {
        mood_distribution: moods,
        metrics,
        total_entries: total,
    })))
}

/// Appointment breakdowns by type, status, and hour of day.
pub async fn appointment_analytics(
    State(state): State<AppState>,
) -> Result<Json<Envelope<AppointmentAnalytics>>, ApiError> {
    let mut appointments: Vec<Appointment> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;

    if appointments.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::appointment_analytics())));
    }

    let mut by_type: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut by_status: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut peak_hours: BTreeMap<u8, u32> = BTreeMap::new();

    for appointment in &appointments {
        *by_type.entry(appointment.kind.as_str()).or_default() += 1;
        *by_status.entry(appointment.status.as_str()).or_default() += 1;
        if let Some(hour) = hour_of(&appointment.time) {
            *peak_hours.entry(hour).or_default() += 1;
        }
    }

    appointments.sort_by(|a, b| b.date.cmp(&a.date));
    let total = appointments.len();

    let mut recent = Vec::new();
    for appointment in appointments.into_iter().take(10) {
        let student = load_profile(&state, appointment.user_id).await?;
        recent.push(AppointmentView {
            appointment,
            student,
        });
    }

    Ok(Json(Envelope::ok(AppointmentAnalytics {
        total,
        by_type,
        by_status,
        peak_hours,
        recent_appointments: recent,
    })))
}

fn engagement_tier(views: u32) -> &'static str {
    if views > 100 {
        "High"
    } else if views > 50 {
        "Medium"
    } else {
        "Low"
    }
}

/// Top resources by views.
pub async fn resource_engagement(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ResourceEngagement>>>, ApiError> {
    let mut resources: Vec<Resource> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::RESOURCES_PREFIX).await?;

    if resources.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::resource_engagement())));
    }

    resources.sort_by(|a, b| b.views.cmp(&a.views));
    resources.truncate(10);

    let engagement = resources
        .into_iter()
        .map(|r| ResourceEngagement {
            id: r.id,
            title: r.title,
            views: r.views,
            likes: r.likes,
            category: r.category,
            engagement: engagement_tier(r.views),
        })
        .collect();

    Ok(Json(Envelope::ok(engagement)))
}

/// Posts and reply counts per forum category.
pub async fn forum_activity(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ForumActivity>>>, ApiError> {
    let posts: Vec<ForumPost> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::FORUM_POSTS_PREFIX).await?;

    if posts.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::forum_activity())));
    }

    let mut categories: BTreeMap<&'static str, (u32, u32)> = BTreeMap::new();
    for post in &posts {
        let entry = categories.entry(post.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += post.replies.len() as u32;
    }

    let activity = categories
        .into_iter()
        .map(|(category, (posts, comments))| ForumActivity {
            category,
            posts,
            comments,
            engagement: if posts > 50 {
                "High"
            } else if posts > 20 {
                "Medium"
            } else {
                "Low"
            },
        })
        .collect();

    Ok(Json(Envelope::ok(activity)))
}

/// Recent assessments with concerning scores. Scores above 20 are flagged;
/// above 24 is critical.
pub async fn high_risk_flags(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<RiskFlag>>>, ApiError> {
    let mut records: Vec<AssessmentRecord> =
        docs::load_all(&state.s3, &state.bucket, doc_keys::ASSESSMENTS_PREFIX).await?;
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(20);

    let mut flags = Vec::new();
    for record in records {
        if record.score <= 20 {
            continue;
        }

        let student = load_profile(&state, record.user_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_else(|| "Anonymous".to_string());
        let max = get_questionnaire(record.kind).max_score();

        flags.push(RiskFlag {
            id: record.id,
            student,
            flag: format!(
                "High {} score: {}/{max}",
                record.kind.label(),
                record.score
            ),
            date: record
                .created_at
                .to_zoned(jiff::tz::TimeZone::UTC)
                .date()
                .to_string(),
            severity: if record.score > 24 {
                "critical"
            } else {
                "warning"
            },
            reviewed: false,
        });
    }

    if flags.is_empty() && state.demo {
        return Ok(Json(Envelope::ok(demo::risk_flags())));
    }

    Ok(Json(Envelope::ok(flags)))
}

/// Operational notices for the admin dashboard.
pub async fn system_alerts() -> Json<Envelope<Vec<SystemAlert>>> {
    let now = jiff::Timestamp::now();
    let ago = |hours: i64| {
        now.checked_sub(jiff::Span::new().hours(hours))
            .unwrap_or(now)
    };

    Json(Envelope::ok(vec![
        SystemAlert {
            id: 1,
            kind: "warning",
            message: "5 new crisis assessments this week",
            timestamp: ago(1),
        },
        SystemAlert {
            id: 2,
            kind: "info",
            message: "Server backup completed successfully",
            timestamp: ago(2),
        },
        SystemAlert {
            id: 3,
            kind: "alert",
            message: "3 counselors with high load (>40 appointments/week)",
            timestamp: ago(24),
        },
    ]))
}

/// Activate or deactivate an account. A deactivated user cannot log in.
pub async fn update_user_status(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Envelope<UserProfile>>, ApiError> {
    let key = doc_keys::user(user_id);
    let (mut user, _) = match docs::load::<User>(&state.s3, &state.bucket, &key).await {
        Ok(found) => found,
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    user.active = payload.active;
    user.updated_at = jiff::Timestamp::now();
    docs::save(&state.s3, &state.bucket, &key, &user).await?;

    let verb = if payload.active {
        "activated"
    } else {
        "deactivated"
    };
    Ok(Json(Envelope::ok_with(
        user.profile(),
        format!("User {verb}"),
    )))
}

/// Assign a counsellor to a batch of students. Ids that do not resolve to a
/// student are skipped; the count of updated records is reported.
pub async fn assign_counsellor(
    State(state): State<AppState>,
    Json(payload): Json<AssignPayload>,
) -> Result<Json<Envelope<()>>, ApiError> {
    if payload.student_ids.is_empty() {
        return Err(ApiError::BadRequest(
            "student_ids must not be empty".to_string(),
        ));
    }

    let mut updated = 0;
    for student_id in payload.student_ids {
        let key = doc_keys::user(student_id);
        let mut user = match docs::load::<User>(&state.s3, &state.bucket, &key).await {
            Ok((user, _)) if user.role == Role::Student => user,
            Ok(_) => continue,
            Err(StorageError::NotFound { .. }) => continue,
            Err(err) => return Err(err.into()),
        };

        user.assigned_counsellor = Some(payload.counsellor_id);
        user.updated_at = jiff::Timestamp::now();
        docs::save(&state.s3, &state.bucket, &key, &user).await?;
        updated += 1;
    }

    Ok(Json(Envelope::accepted(format!(
        "{updated} students assigned to counselor"
    ))))
}

#[cfg(test)]
mod tests {
    use super::hour_of;

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(hour_of("10:00 AM"), Some(10));
        assert_eq!(hour_of("2:30 PM"), Some(14));
        assert_eq!(hour_of("12:00 PM"), Some(12));
        assert_eq!(hour_of("12:15 AM"), Some(0));
        assert_eq!(hour_of("14:00"), Some(14));
        assert_eq!(hour_of("soon"), None);
    }
}
