//! # Availability Engine
//!
//! Maintains per-master schedule records and answers point-in-time
//! availability queries. Every mutation loads the master's whole record,
//! rewrites it locally, and saves it back as a unit, holding that master's
//! lock across the cycle.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use fixmatch_core::errors::{EngineError, EngineResult};
use fixmatch_core::models::{DaySchedule, MasterId, MasterSchedule, TimeSlot};
use fixmatch_core::store::{MasterDirectory, ScheduleStore};
use tracing::debug;

use crate::config::EngineConfig;
use crate::locks::MasterLocks;

pub struct AvailabilityEngine {
    store: Arc<dyn ScheduleStore>,
    directory: Arc<dyn MasterDirectory>,
    locks: Arc<MasterLocks>,
    config: EngineConfig,
}

impl AvailabilityEngine {
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        directory: Arc<dyn MasterDirectory>,
        locks: Arc<MasterLocks>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            directory,
            locks,
            config,
        }
    }

    /// Replaces one day of a master's schedule.
    ///
    /// Jobs already booked on that date are preserved; everything else
    /// about the entry is overwritten. An available day requires a working
    /// window, and an unavailable day stores none even if one was
    /// previously present.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidSlot` - `available` is true without a slot,
    ///   or the slot's start is after its end
    /// * `EngineError::Storage` - the record could not be read or written
    pub async fn set_day(
        &self,
        master_id: MasterId,
        date: NaiveDate,
        available: bool,
        slot: Option<TimeSlot>,
    ) -> EngineResult<()> {
        let time_slot = match (available, slot) {
            (true, Some(slot)) => {
                if slot.start > slot.end {
                    return Err(EngineError::InvalidSlot(format!(
                        "slot start {} is after end {}",
                        slot.start, slot.end
                    )));
                }
                Some(slot)
            }
            (true, None) => {
                return Err(EngineError::InvalidSlot(
                    "an available day requires a working window".to_string(),
                ));
            }
            (false, _) => None,
        };

        let _guard = self.locks.acquire(master_id).await;

        let mut schedule = self.store.load(master_id).await?;

        // Keep the date's booked jobs across the rewrite
        let booked_jobs = schedule
            .get(&date)
            .map(|day| day.booked_jobs.clone())
            .unwrap_or_default();

        schedule.insert(
            date,
            DaySchedule {
                date,
                available,
                time_slot,
                booked_jobs,
            },
        );

        debug!(master_id, %date, available, "Updated day schedule");
        self.store.save(master_id, &schedule).await
    }

    /// Whether the master is available on `date`, and at that exact time
    /// when `time` is given. A date with no entry is unavailable.
    pub async fn is_available(
        &self,
        master_id: MasterId,
        date: NaiveDate,
        time: Option<NaiveTime>,
    ) -> EngineResult<bool> {
        let schedule = self.store.load(master_id).await?;

        Ok(match schedule.get(&date) {
            None => false,
            Some(day) => match time {
                Some(time) => day.is_available_at(time),
                None => day.available,
            },
        })
    }

    /// Creates a 7-day schedule beginning today, using the engine's
    /// configured working window and weekdays.
    pub async fn create_default_weekly_schedule(&self, master_id: MasterId) -> EngineResult<()> {
        self.create_weekly_schedule(
            master_id,
            self.config.day_start,
            self.config.day_end,
            &self.config.working_weekdays,
        )
        .await
    }

    /// Creates a 7-day schedule beginning today: weekdays in
    /// `working_weekdays` get the uniform slot, the rest are unavailable.
    pub async fn create_weekly_schedule(
        &self,
        master_id: MasterId,
        start: NaiveTime,
        end: NaiveTime,
        working_weekdays: &[Weekday],
    ) -> EngineResult<()> {
        self.create_weekly_schedule_from(
            master_id,
            Utc::now().date_naive(),
            start,
            end,
            working_weekdays,
        )
        .await
    }

    /// Body of [`create_weekly_schedule`](Self::create_weekly_schedule)
    /// with an explicit first day.
    ///
    /// The master's entire record is replaced with exactly these 7 entries:
    /// any previously stored date outside the window is discarded, booked
    /// jobs included. Callers rely on this "reset my week" behavior.
    pub async fn create_weekly_schedule_from(
        &self,
        master_id: MasterId,
        from: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        working_weekdays: &[Weekday],
    ) -> EngineResult<()> {
        let slot = TimeSlot::new(start, end)?;

        let _guard = self.locks.acquire(master_id).await;

        let mut schedule = MasterSchedule::new();
        for offset in 0..7 {
            let date = from + Duration::days(offset);
            let day = if working_weekdays.contains(&date.weekday()) {
                DaySchedule::available(date, slot)
            } else {
                DaySchedule::unavailable(date)
            };
            schedule.insert(date, day);
        }

        debug!(master_id, %from, "Created weekly schedule");
        self.store.save(master_id, &schedule).await
    }

    /// Number of jobs already booked for the master on `date`; 0 when the
    /// date has no entry.
    pub async fn workload(&self, master_id: MasterId, date: NaiveDate) -> EngineResult<usize> {
        let schedule = self.store.load(master_id).await?;

        Ok(schedule
            .get(&date)
            .map(|day| day.booked_jobs.len())
            .unwrap_or(0))
    }

    /// Records that the master confirmed their schedule at `now`.
    ///
    /// # Errors
    ///
    /// * `EngineError::NotFound` - no such master is registered
    pub async fn confirm_schedule(
        &self,
        master_id: MasterId,
        now: DateTime<Utc>,
    ) -> EngineResult<()> {
        self.directory.set_last_confirmation(master_id, now).await?;
        debug!(master_id, "Schedule confirmed");
        Ok(())
    }

    /// Whether a confirmation recorded at `last_confirmation` has gone
    /// stale by `now`. True when no confirmation exists or when strictly
    /// more than the configured interval has passed; exactly at the
    /// interval the confirmation still holds.
    pub fn needs_confirmation(
        &self,
        last_confirmation: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        match last_confirmation {
            None => true,
            Some(last) => now - last > self.config.confirmation_interval,
        }
    }

    /// Looks up the master and applies
    /// [`needs_confirmation`](Self::needs_confirmation) to its stored
    /// timestamp. An unregistered master needs confirmation.
    pub async fn needs_confirmation_for(
        &self,
        master_id: MasterId,
        now: DateTime<Utc>,
    ) -> EngineResult<bool> {
        let master = self.directory.get(master_id).await?;

        Ok(match master {
            None => true,
            Some(master) => self.needs_confirmation(master.last_schedule_confirmation, now),
        })
    }
}
