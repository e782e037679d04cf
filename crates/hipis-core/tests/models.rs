use hipis_core::envelope::Envelope;
use hipis_core::models::appointment::{
    Appointment, AppointmentStatus, AppointmentType, CancelOutcome,
};
use uuid::Uuid;

fn upcoming_appointment() -> Appointment {
    let now: jiff::Timestamp = "2025-03-01T09:00:00Z".parse().unwrap();
    Appointment {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        counsellor: Uuid::new_v4(),
        kind: AppointmentType::VideoCall,
        date: jiff::civil::date(2025, 3, 10),
        time: "10:00 AM".to_string(),
        status: AppointmentStatus::Upcoming,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn cancel_moves_upcoming_to_cancelled() {
    let mut appt = upcoming_appointment();
    let outcome = appt.cancel().unwrap();
    assert_eq!(outcome, CancelOutcome::Cancelled);
    assert_eq!(appt.status, AppointmentStatus::Cancelled);
}

#[test]
fn cancel_twice_is_a_noop() {
    let mut appt = upcoming_appointment();
    appt.cancel().unwrap();
    let outcome = appt.cancel().unwrap();
    assert_eq!(outcome, CancelOutcome::AlreadyCancelled);
    assert_eq!(appt.status, AppointmentStatus::Cancelled);
}

#[test]
fn cancel_rejects_completed_appointment() {
    let mut appt = upcoming_appointment();
    appt.status = AppointmentStatus::Completed;
    assert!(appt.cancel().is_err());
    assert_eq!(appt.status, AppointmentStatus::Completed);
}

#[test]
fn appointment_type_uses_kebab_case_wire_values() {
    let json = serde_json::to_string(&AppointmentType::VideoCall).unwrap();
    assert_eq!(json, "\"video-call\"");
    let json = serde_json::to_string(&AppointmentType::InPerson).unwrap();
    assert_eq!(json, "\"in-person\"");
}

#[test]
fn envelope_omits_empty_fields() {
    let value = serde_json::to_value(Envelope::<()>::empty()).unwrap();
    assert_eq!(value, serde_json::json!({ "success": true }));

    let value = serde_json::to_value(Envelope::ok(vec![1, 2, 3])).unwrap();
    assert_eq!(value, serde_json::json!({ "success": true, "data": [1, 2, 3] }));

    let value = serde_json::to_value(Envelope::<()>::failure("Forbidden")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "success": false, "message": "Forbidden" })
    );
}
