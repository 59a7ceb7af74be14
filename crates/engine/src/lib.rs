//! # Fixmatch Engine
//!
//! The engine crate implements the master availability and job-matching
//! core of the marketplace: per-master day schedules, point-in-time
//! availability queries, candidate scoring, and booking commits.
//!
//! ## Architecture
//!
//! The crate is split along the lifecycle of a job:
//!
//! - **Availability**: maintains each master's schedule record and answers
//!   "is master M free at time T"
//! - **Matching**: filters and ranks candidate masters for a job request
//! - **Booking**: commits an assignment into the chosen master's schedule
//! - **Config**: environment-driven defaults for working windows and
//!   confirmation intervals
//!
//! Persistence is injected through the `ScheduleStore` and
//! `MasterDirectory` traits from `fixmatch-core`; the engine never talks to
//! a database directly. Every mutation runs a load-mutate-save cycle over
//! the whole schedule record, serialized per master by a shared
//! [`MasterLocks`] registry.

/// Schedule maintenance and availability queries
pub mod availability;
/// Booking commits into a master's schedule
pub mod booking;
/// Environment-driven engine configuration
pub mod config;
/// Per-master mutual exclusion for record mutations
pub mod locks;
/// Candidate filtering, scoring, and selection strategies
pub mod matching;

pub use availability::AvailabilityEngine;
pub use booking::BookingCoordinator;
pub use config::EngineConfig;
pub use locks::MasterLocks;
pub use matching::{Matcher, RatingOnlyMatcher, ScheduleAwareMatcher};
