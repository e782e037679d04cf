use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AppointmentType {
    Individual,
    Group,
    Crisis,
    VideoCall,
    InPerson,
    Phone,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Individual => "individual",
            AppointmentType::Group => "group",
            AppointmentType::Crisis => "crisis",
            AppointmentType::VideoCall => "video-call",
            AppointmentType::InPerson => "in-person",
            AppointmentType::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "upcoming",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    /// The student the appointment is booked for.
    pub user_id: Uuid,
    /// The counsellor party.
    pub counsellor: Uuid,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub date: jiff::civil::Date,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Result of a cancel transition that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    /// The appointment was already cancelled; the call is a no-op.
    AlreadyCancelled,
}

impl Appointment {
    /// One-way `upcoming -> cancelled` transition. Cancelling twice is a
    /// no-op; a completed appointment cannot be cancelled.
    pub fn cancel(&mut self) -> Result<CancelOutcome, CoreError> {
        match self.status {
            AppointmentStatus::Cancelled => Ok(CancelOutcome::AlreadyCancelled),
            AppointmentStatus::Completed => Err(CoreError::InvalidTransition(
                "appointment is already completed".to_string(),
            )),
            AppointmentStatus::Upcoming => {
                self.status = AppointmentStatus::Cancelled;
                Ok(CancelOutcome::Cancelled)
            }
        }
    }
}
