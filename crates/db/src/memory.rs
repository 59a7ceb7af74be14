//! In-memory implementations of the store traits, used by engine tests and
//! any caller that wants the matching core without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fixmatch_core::errors::{EngineError, EngineResult};
use fixmatch_core::models::{Master, MasterId, MasterSchedule};
use fixmatch_core::store::{MasterDirectory, ScheduleStore};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryScheduleStore {
    records: RwLock<HashMap<MasterId, MasterSchedule>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn load(&self, master_id: MasterId) -> EngineResult<MasterSchedule> {
        let records = self.records.read().await;
        Ok(records.get(&master_id).cloned().unwrap_or_default())
    }

    async fn save(&self, master_id: MasterId, schedule: &MasterSchedule) -> EngineResult<()> {
        let mut records = self.records.write().await;
        records.insert(master_id, schedule.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryMasterDirectory {
    masters: RwLock<HashMap<MasterId, Master>>,
}

impl InMemoryMasterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, master: Master) {
        let mut masters = self.masters.write().await;
        masters.insert(master.id, master);
    }

    fn matches(master: &Master, specialization: &str, city: &str) -> bool {
        master.is_active
            && master.city == city
            && master.specializations.iter().any(|s| s == specialization)
    }
}

#[async_trait]
impl MasterDirectory for InMemoryMasterDirectory {
    async fn get(&self, master_id: MasterId) -> EngineResult<Option<Master>> {
        let masters = self.masters.read().await;
        Ok(masters.get(&master_id).cloned())
    }

    async fn candidates(&self, specialization: &str, city: &str) -> EngineResult<Vec<Master>> {
        let masters = self.masters.read().await;
        let mut found: Vec<Master> = masters
            .values()
            .filter(|m| Self::matches(m, specialization, city))
            .cloned()
            .collect();
        found.sort_by_key(|m| m.id);
        Ok(found)
    }

    async fn top_rated(&self, specialization: &str, city: &str) -> EngineResult<Option<Master>> {
        let mut found = self.candidates(specialization, city).await?;
        // Highest rating first, ties by ascending id (candidates are already
        // id-ordered, and the sort is stable)
        found.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(found.into_iter().next())
    }

    async fn set_last_confirmation(
        &self,
        master_id: MasterId,
        when: DateTime<Utc>,
    ) -> EngineResult<()> {
        let mut masters = self.masters.write().await;
        match masters.get_mut(&master_id) {
            Some(master) => {
                master.last_schedule_confirmation = Some(when);
                Ok(())
            }
            None => Err(EngineError::NotFound(format!(
                "Master with id {} not found",
                master_id
            ))),
        }
    }
}
