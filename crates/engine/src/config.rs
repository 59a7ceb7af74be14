//! # Engine Configuration Module
//!
//! This module loads the engine's tunable defaults from environment
//! variables, falling back to the values the marketplace has always used.
//!
//! ## Environment Variables
//!
//! - `FIXMATCH_DAY_START`: default working-window start, `HH:MM` (default: "08:00")
//! - `FIXMATCH_DAY_END`: default working-window end, `HH:MM` (default: "20:00")
//! - `FIXMATCH_CONFIRMATION_HOURS`: hours after which a master must
//!   re-confirm their schedule (default: 12)

use chrono::{Duration, NaiveTime, Weekday};
use std::env;

const DEFAULT_DAY_START: &str = "08:00";
const DEFAULT_DAY_END: &str = "20:00";
const DEFAULT_CONFIRMATION_HOURS: i64 = 12;

/// Engine defaults for weekly schedules and confirmation tracking.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Default working-window start for generated weekly schedules
    pub day_start: NaiveTime,

    /// Default working-window end for generated weekly schedules
    pub day_end: NaiveTime,

    /// A master whose last confirmation is older than this must re-confirm
    pub confirmation_interval: Duration,

    /// Weekdays marked available by a default weekly schedule
    pub working_weekdays: Vec<Weekday>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_start: parse_time(DEFAULT_DAY_START).expect("default day start is valid"),
            day_end: parse_time(DEFAULT_DAY_END).expect("default day end is valid"),
            confirmation_interval: Duration::hours(DEFAULT_CONFIRMATION_HOURS),
            working_weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl EngineConfig {
    /// Creates an EngineConfig from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let day_start = env::var("FIXMATCH_DAY_START")
            .ok()
            .and_then(|s| parse_time(&s))
            .unwrap_or(defaults.day_start);

        let day_end = env::var("FIXMATCH_DAY_END")
            .ok()
            .and_then(|s| parse_time(&s))
            .unwrap_or(defaults.day_end);

        let confirmation_interval = env::var("FIXMATCH_CONFIRMATION_HOURS")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Duration::hours)
            .unwrap_or(defaults.confirmation_interval);

        Self {
            day_start,
            day_end,
            confirmation_interval,
            working_weekdays: defaults.working_weekdays,
        }
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
