use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Masters and jobs are keyed by the marketplace's integer ids.
pub type MasterId = i64;
pub type JobId = i64;

/// Read-model of a registered field technician. Registration and field
/// validation belong to the upstream registration flow; the matching core
/// only filters and scores on these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Master {
    pub id: MasterId,
    pub full_name: String,
    pub phone: String,
    pub specializations: Vec<String>,
    pub city: String,
    pub rating: f64,
    pub is_active: bool,
    pub last_schedule_confirmation: Option<DateTime<Utc>>,
}

/// What the job-intake flow hands to a matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub specialization: String,
    pub city: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

/// Matching result fed back to the assignment/notification flow. `Pending`
/// is a normal outcome, not an error; the caller falls back to manual
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    Assigned(MasterId),
    Pending,
}

/// Result of a booking attempt. `NoScheduleEntry` means the master has no
/// entry for that date and nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    Booked,
    NoScheduleEntry,
}
