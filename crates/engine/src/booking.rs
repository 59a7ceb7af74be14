use std::sync::Arc;

use chrono::NaiveDate;
use fixmatch_core::errors::EngineResult;
use fixmatch_core::models::{BookingOutcome, JobId, MasterId};
use fixmatch_core::store::ScheduleStore;
use tracing::debug;

use crate::locks::MasterLocks;

/// Commits job assignments into a master's schedule. Shares the lock
/// registry with the availability engine so bookings and day updates on
/// the same master never interleave their load-mutate-save cycles.
pub struct BookingCoordinator {
    store: Arc<dyn ScheduleStore>,
    locks: Arc<MasterLocks>,
}

impl BookingCoordinator {
    pub fn new(store: Arc<dyn ScheduleStore>, locks: Arc<MasterLocks>) -> Self {
        Self { store, locks }
    }

    /// Appends `job_id` to the master's bookings for `date`.
    ///
    /// A date with no schedule entry is left untouched and reported as
    /// `NoScheduleEntry`: the engine never fabricates availability a master
    /// didn't set. There is no duplicate check and no capacity limit, so a
    /// day can be over-booked. A booked job stays booked; cancellation is
    /// the caller's concern.
    pub async fn book(
        &self,
        master_id: MasterId,
        job_id: JobId,
        date: NaiveDate,
    ) -> EngineResult<BookingOutcome> {
        let _guard = self.locks.acquire(master_id).await;

        let mut schedule = self.store.load(master_id).await?;

        match schedule.get_mut(&date) {
            Some(day) => {
                day.booked_jobs.push(job_id);
                self.store.save(master_id, &schedule).await?;
                debug!(master_id, job_id, %date, "Booked job");
                Ok(BookingOutcome::Booked)
            }
            None => {
                debug!(master_id, job_id, %date, "No schedule entry for date, booking ignored");
                Ok(BookingOutcome::NoScheduleEntry)
            }
        }
    }
}
