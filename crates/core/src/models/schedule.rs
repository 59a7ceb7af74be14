use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::master::JobId;
use crate::models::time_slot::TimeSlot;

/// One master's availability for a single calendar date, plus the jobs
/// already booked on it. `time_slot` is `None` whenever `available` is
/// false. `booked_jobs` keeps booking order and allows duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub available: bool,
    pub time_slot: Option<TimeSlot>,
    #[serde(default)]
    pub booked_jobs: Vec<JobId>,
}

impl DaySchedule {
    pub fn unavailable(date: NaiveDate) -> Self {
        Self {
            date,
            available: false,
            time_slot: None,
            booked_jobs: Vec::new(),
        }
    }

    pub fn available(date: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            date,
            available: true,
            time_slot: Some(slot),
            booked_jobs: Vec::new(),
        }
    }

    /// Point-in-time availability: the day must be available and the time
    /// must fall inside the working slot.
    pub fn is_available_at(&self, time: NaiveTime) -> bool {
        if !self.available {
            return false;
        }
        match &self.time_slot {
            Some(slot) => slot.contains(time),
            None => false,
        }
    }
}

/// The whole schedule record owned by one master: date -> DaySchedule,
/// serialized as a single JSON object keyed by ISO `YYYY-MM-DD`. The record
/// is always loaded and saved as a unit; BTreeMap ordering keeps repeated
/// serializations byte-identical.
pub type MasterSchedule = BTreeMap<NaiveDate, DaySchedule>;
