use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// A master's working window within one day. Both bounds are inclusive:
/// a job at exactly `start` or exactly `end` is still inside the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Builds a slot, rejecting windows where `start` is after `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidSlot(format!(
                "slot start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// True iff `start <= time <= end`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}
