pub mod master;
pub mod schedule;
pub mod time_slot;

pub use master::{Assignment, BookingOutcome, JobId, JobRequest, Master, MasterId};
pub use schedule::{DaySchedule, MasterSchedule};
pub use time_slot::TimeSlot;
