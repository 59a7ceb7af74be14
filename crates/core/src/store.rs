use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::EngineResult;
use crate::models::{Master, MasterId, MasterSchedule};

/// Durable mapping of master id -> schedule record.
///
/// The record is the unit of persistence: `load` returns the whole mapping
/// (empty if the master has never stored one) and `save` overwrites it
/// unconditionally. There is no compare-and-swap and no partial merge, so
/// callers must load, mutate a local copy, and save the whole structure
/// back. Within one process the engine serializes that cycle per master;
/// concurrent writers from other processes are not guarded against and the
/// later `save` wins in full.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn load(&self, master_id: MasterId) -> EngineResult<MasterSchedule>;

    async fn save(&self, master_id: MasterId, schedule: &MasterSchedule) -> EngineResult<()>;
}

/// Read access to the externally owned master roster, plus the single field
/// this core writes back (the schedule-confirmation timestamp).
#[async_trait]
pub trait MasterDirectory: Send + Sync {
    async fn get(&self, master_id: MasterId) -> EngineResult<Option<Master>>;

    /// Active masters in `city` whose specializations contain
    /// `specialization` exactly, ordered by ascending id.
    async fn candidates(&self, specialization: &str, city: &str) -> EngineResult<Vec<Master>>;

    /// Highest-rated master among the same filter, ties broken by ascending
    /// id. Ignores schedule and workload.
    async fn top_rated(&self, specialization: &str, city: &str) -> EngineResult<Option<Master>>;

    async fn set_last_confirmation(
        &self,
        master_id: MasterId,
        when: DateTime<Utc>,
    ) -> EngineResult<()>;
}
