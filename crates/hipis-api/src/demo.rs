//! Canned demonstration data for counsellor and admin dashboards.
//!
//! Only reachable when `HIPIS_DEMO` is set: an empty collection then renders
//! as a plausible populated dashboard. With the flag off, empty is empty.

use std::collections::BTreeMap;

use uuid::Uuid;

use hipis_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use hipis_core::models::counsellor_client::{ClientStatus, CounsellorClient, PrimaryIssue};
use hipis_core::models::counsellor_note::{CounsellorNote, NoteMood};
use hipis_core::models::user::{Role, UserProfile};

use crate::routes::admin::{
    AdminStats, AppointmentAnalytics, ForumActivity, MoodDistribution, ResourceEngagement,
    RiskFlag,
};
use crate::routes::counsellor::{AppointmentView, ClientView, CounsellorStats, NoteView};

fn now() -> jiff::Timestamp {
    jiff::Timestamp::now()
}

fn hours_ago(hours: i64) -> jiff::Timestamp {
    let now = now();
    now.checked_sub(jiff::Span::new().hours(hours))
        .unwrap_or(now)
}

fn days_from(today: jiff::civil::Date, days: i64) -> jiff::civil::Date {
    today
        .checked_add(jiff::Span::new().days(days))
        .unwrap_or(today)
}

fn student_profile(name: &str, email: &str) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Student,
        university: String::new(),
        active: true,
        assigned_counsellor: None,
        created_at: hours_ago(24 * 30),
    }
}

const DEMO_STUDENTS: [(&str, &str); 3] = [
    ("Aarav Kumar", "aarav@college.edu"),
    ("Priya Sharma", "priya@college.edu"),
    ("Rahul Singh", "rahul@college.edu"),
];

pub fn counsellor_clients(counsellor_id: Uuid) -> Vec<ClientView> {
    let issues = [
        PrimaryIssue::Anxiety,
        PrimaryIssue::Depression,
        PrimaryIssue::Academic,
    ];

    DEMO_STUDENTS
        .iter()
        .zip(issues)
        .enumerate()
        .map(|(i, ((name, email), primary_issue))| {
            let client = student_profile(name, email);
            ClientView {
                record: CounsellorClient {
                    id: Uuid::new_v4(),
                    counsellor_id,
                    client_id: client.id,
                    primary_issue,
                    status: ClientStatus::Active,
                    start_date: hours_ago(24 * 30),
                    last_session_date: Some(hours_ago(24 * (i as i64 + 1))),
                    notes: String::new(),
                    created_at: hours_ago(24 * 30),
                    updated_at: hours_ago(24 * (i as i64 + 1)),
                },
                client: Some(client),
            }
        })
        .collect()
}

fn demo_appointment(
    counsellor_id: Uuid,
    student: UserProfile,
    date: jiff::civil::Date,
    time: &str,
    kind: AppointmentType,
) -> AppointmentView {
    AppointmentView {
        appointment: Appointment {
            id: Uuid::new_v4(),
            user_id: student.id,
            counsellor: counsellor_id,
            kind,
            date,
            time: time.to_string(),
            status: AppointmentStatus::Upcoming,
            created_at: hours_ago(48),
            updated_at: hours_ago(48),
        },
        student: Some(student),
    }
}

pub fn todays_appointments(
    counsellor_id: Uuid,
    today: jiff::civil::Date,
) -> Vec<AppointmentView> {
    let slots = [
        ("10:00 AM", AppointmentType::VideoCall),
        ("11:30 AM", AppointmentType::InPerson),
        ("2:00 PM", AppointmentType::Phone),
    ];

    DEMO_STUDENTS
        .iter()
        .zip(slots)
        .map(|((name, email), (time, kind))| {
            demo_appointment(counsellor_id, student_profile(name, email), today, time, kind)
        })
        .collect()
}

pub fn upcoming_appointments(
    counsellor_id: Uuid,
    today: jiff::civil::Date,
) -> Vec<AppointmentView> {
    let slots = [
        (1, "10:00 AM", AppointmentType::VideoCall),
        (2, "3:00 PM", AppointmentType::InPerson),
        (5, "1:30 PM", AppointmentType::Phone),
    ];

    DEMO_STUDENTS
        .iter()
        .zip(slots)
        .map(|((name, email), (offset, time, kind))| {
            demo_appointment(
                counsellor_id,
                student_profile(name, email),
                days_from(today, offset),
                time,
                kind,
            )
        })
        .collect()
}

pub fn recent_notes(counsellor_id: Uuid) -> Vec<NoteView> {
    let notes = [
        (
            "Client showed improvement in anxiety management techniques. Practiced breathing exercises.",
            vec!["Breathing exercises", "Positive progress"],
            NoteMood::Improved,
            "Continue daily practice",
            2,
        ),
        (
            "Discussed family relationships and healthy boundaries. Client engaged well in conversation.",
            vec!["Family dynamics", "Boundaries", "Communication"],
            NoteMood::Stable,
            "Journal about interactions",
            5,
        ),
        (
            "Initial session. Identified main stressors: academics and peer pressure. Established therapeutic goals.",
            vec!["Academic stress", "Goal setting", "Initial assessment"],
            NoteMood::Declined,
            "Next session: Stress management strategies",
            1,
        ),
    ];

    DEMO_STUDENTS
        .iter()
        .zip(notes)
        .map(|((name, email), (content, key_points, mood, follow_up, days))| {
            let client = student_profile(name, email);
            NoteView {
                note: CounsellorNote {
                    id: Uuid::new_v4(),
                    counsellor_id,
                    client_id: client.id,
                    content: content.to_string(),
                    session_date: hours_ago(24 * days),
                    follow_up: follow_up.to_string(),
                    key_points: key_points.into_iter().map(str::to_string).collect(),
                    mood,
                    created_at: hours_ago(24 * days),
                },
                client: Some(client),
            }
        })
        .collect()
}

pub fn counsellor_stats_floor(stats: &mut CounsellorStats) {
    stats.active_clients = stats.active_clients.max(12);
    stats.todays_sessions = stats.todays_sessions.max(4);
    stats.this_week_sessions = stats.this_week_sessions.max(18);
    stats.completion_rate = stats.completion_rate.max(67);
}

pub fn admin_stats_floor(stats: &mut AdminStats) {
    stats.total_students = stats.total_students.max(187);
    stats.total_counsellors = stats.total_counsellors.max(12);
    stats.total_appointments = stats.total_appointments.max(342);
    stats.today_appointments = stats.today_appointments.max(16);
    stats.completed_appointments = stats.completed_appointments.max(254);
    stats.pending_appointments = stats.pending_appointments.max(28);
    stats.appointment_rate = stats.appointment_rate.max(74);
    stats.cancellation_rate = stats.cancellation_rate.max(8);
    stats.mood_entries = stats.mood_entries.max(512);
    stats.resources = stats.resources.max(42);
    stats.forum_posts = stats.forum_posts.max(287);
    stats.active_users = stats.active_users.max(199);
}

pub fn mood_distribution() -> MoodDistribution {
    MoodDistribution {
        happy: 45,
        good: 52,
        neutral: 38,
        stressed: 28,
        anxious: 22,
        depressed: 10,
    }
}

pub fn appointment_analytics() -> AppointmentAnalytics {
    let by_type = BTreeMap::from([("video-call", 185), ("in-person", 128), ("phone", 29)]);
    let by_status = BTreeMap::from([("upcoming", 58), ("completed", 254), ("cancelled", 30)]);
    let peak_hours = BTreeMap::from([
        (9, 12),
        (10, 28),
        (11, 35),
        (12, 22),
        (14, 31),
        (15, 38),
        (16, 29),
        (17, 18),
    ]);

    let today = jiff::Zoned::now().date();
    let counsellor = Uuid::new_v4();
    let recent = vec![
        demo_appointment(
            counsellor,
            student_profile("Aarav Kumar", "aarav@college.edu"),
            today,
            "10:00 AM",
            AppointmentType::VideoCall,
        ),
        demo_appointment(
            counsellor,
            student_profile("Priya Sharma", "priya@college.edu"),
            today,
            "11:30 AM",
            AppointmentType::InPerson,
        ),
    ];

    AppointmentAnalytics {
        total: 342,
        by_type,
        by_status,
        peak_hours,
        recent_appointments: recent,
    }
}

pub fn resource_engagement() -> Vec<ResourceEngagement> {
    use hipis_core::models::resource::ResourceCategory;

    let rows = [
        ("Stress Management Techniques", 245, 38, ResourceCategory::Stress),
        ("Sleep Hygiene Guide", 189, 32, ResourceCategory::Sleep),
        ("Anxiety Disorders Explained", 156, 28, ResourceCategory::Anxiety),
        ("Mindfulness Practice 101", 132, 22, ResourceCategory::Stress),
        ("Depression: Recovery Guide", 178, 31, ResourceCategory::Depression),
        ("Time Management for Students", 187, 35, ResourceCategory::Academic),
    ];

    rows.into_iter()
        .map(|(title, views, likes, category)| ResourceEngagement {
            id: Uuid::new_v4(),
            title: title.to_string(),
            views,
            likes,
            category,
            engagement: if views > 100 {
                "High"
            } else if views > 50 {
                "Medium"
            } else {
                "Low"
            },
        })
        .collect()
}

pub fn forum_activity() -> Vec<ForumActivity> {
    let rows = [
        ("stress", 95, 278, "High"),
        ("academic", 78, 156, "High"),
        ("anxiety", 82, 195, "High"),
        ("other", 68, 134, "Medium"),
        ("motivation", 43, 85, "Medium"),
        ("sleep", 52, 98, "Medium"),
    ];

    rows.into_iter()
        .map(|(category, posts, comments, engagement)| ForumActivity {
            category,
            posts,
            comments,
            engagement,
        })
        .collect()
}

pub fn risk_flags() -> Vec<RiskFlag> {
    let date = |days: i64| {
        hours_ago(24 * days)
            .to_zoned(jiff::tz::TimeZone::UTC)
            .date()
            .to_string()
    };

    vec![
        RiskFlag {
            id: Uuid::new_v4(),
            student: "Priya Sharma".to_string(),
            flag: "GAD-7 Score: 18 (Severe)".to_string(),
            date: date(0),
            severity: "critical",
            reviewed: false,
        },
        RiskFlag {
            id: Uuid::new_v4(),
            student: "Raj Patel".to_string(),
            flag: "Multiple anxiety reports".to_string(),
            date: date(2),
            severity: "warning",
            reviewed: false,
        },
        RiskFlag {
            id: Uuid::new_v4(),
            student: "Neha Singh".to_string(),
            flag: "Consistent low mood entries".to_string(),
            date: date(5),
            severity: "warning",
            reviewed: true,
        },
    ]
}
