//! # Matching
//!
//! This module selects the best master for a job request. Two strategies
//! exist and both are kept, behind the [`Matcher`] trait:
//!
//! - [`ScheduleAwareMatcher`] is the canonical policy. It filters the
//!   city's active specialists by per-day/per-time availability, scores the
//!   survivors by rating and current workload, and picks the maximum.
//! - [`RatingOnlyMatcher`] reproduces the intake-time fallback: the
//!   highest-rated active specialist in the city, schedule and workload
//!   ignored. Callers that need a fast provisional assignment before the
//!   schedule round-trip use this one.
//!
//! ## Selection Algorithm (schedule-aware)
//!
//! 1. Ask the directory for active masters matching {specialization, city}
//! 2. Keep those available on the requested date (and time, if given)
//! 3. Score each survivor: `rating * 10 - workload(date)`
//! 4. Return the maximum score; ties go to the lowest master id so the
//!    result is reproducible regardless of directory iteration order
//!
//! An empty candidate set is a normal outcome (`Assignment::Pending`), not
//! an error: the caller falls back to manual assignment.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use fixmatch_core::errors::EngineResult;
use fixmatch_core::models::{Assignment, JobRequest, Master, MasterId};
use fixmatch_core::store::MasterDirectory;
use tracing::debug;

use crate::availability::AvailabilityEngine;

/// Weight of a rating point against one booked job in the score.
const RATING_WEIGHT: f64 = 10.0;

/// A master-selection strategy for incoming job requests.
#[async_trait]
pub trait Matcher: Send + Sync {
    async fn select(&self, request: &JobRequest) -> EngineResult<Assignment>;
}

/// Score used to rank available candidates. Higher is better: each rating
/// point outweighs ten booked jobs' worth of workload.
pub fn score(rating: f64, workload: usize) -> f64 {
    rating * RATING_WEIGHT - workload as f64
}

/// The canonical, schedule-aware matching policy.
pub struct ScheduleAwareMatcher {
    availability: Arc<AvailabilityEngine>,
    directory: Arc<dyn MasterDirectory>,
}

impl ScheduleAwareMatcher {
    pub fn new(availability: Arc<AvailabilityEngine>, directory: Arc<dyn MasterDirectory>) -> Self {
        Self {
            availability,
            directory,
        }
    }

    /// Active masters matching the request's specialization and city that
    /// are free on the requested date (and time, when given).
    pub async fn candidates(&self, request: &JobRequest) -> EngineResult<Vec<Master>> {
        let pool = self
            .directory
            .candidates(&request.specialization, &request.city)
            .await?;

        let mut available = Vec::new();
        for master in pool {
            if self
                .availability
                .is_available(master.id, request.date, request.time)
                .await?
            {
                available.push(master);
            }
        }

        debug!(
            specialization = %request.specialization,
            city = %request.city,
            count = available.len(),
            "Filtered candidates by availability"
        );
        Ok(available)
    }

    /// Picks the candidate with the maximum score for `date`. Ties are
    /// broken by ascending master id; an empty slice yields `None`.
    pub async fn select_best(
        &self,
        candidates: &[Master],
        date: NaiveDate,
    ) -> EngineResult<Option<MasterId>> {
        let mut best: Option<(MasterId, f64)> = None;

        for master in candidates {
            let workload = self.availability.workload(master.id, date).await?;
            let candidate_score = score(master.rating, workload);
            debug!(
                master_id = master.id,
                rating = master.rating,
                workload,
                score = candidate_score,
                "Scored candidate"
            );

            best = match best {
                None => Some((master.id, candidate_score)),
                Some((best_id, best_score)) => {
                    if candidate_score > best_score
                        || (candidate_score == best_score && master.id < best_id)
                    {
                        Some((master.id, candidate_score))
                    } else {
                        Some((best_id, best_score))
                    }
                }
            };
        }

        Ok(best.map(|(id, _)| id))
    }
}

#[async_trait]
impl Matcher for ScheduleAwareMatcher {
    async fn select(&self, request: &JobRequest) -> EngineResult<Assignment> {
        let candidates = self.candidates(request).await?;
        let best = self.select_best(&candidates, request.date).await?;

        Ok(match best {
            Some(master_id) => Assignment::Assigned(master_id),
            None => Assignment::Pending,
        })
    }
}

/// Intake-time fallback: the highest-rated active specialist in the city,
/// regardless of schedule or workload. Ties go to the lowest master id.
pub struct RatingOnlyMatcher {
    directory: Arc<dyn MasterDirectory>,
}

impl RatingOnlyMatcher {
    pub fn new(directory: Arc<dyn MasterDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl Matcher for RatingOnlyMatcher {
    async fn select(&self, request: &JobRequest) -> EngineResult<Assignment> {
        let master = self
            .directory
            .top_rated(&request.specialization, &request.city)
            .await?;

        Ok(match master {
            Some(master) => Assignment::Assigned(master.id),
            None => Assignment::Pending,
        })
    }
}
