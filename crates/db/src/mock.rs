use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fixmatch_core::errors::EngineResult;
use fixmatch_core::models::{Master, MasterId, MasterSchedule};
use fixmatch_core::store::{MasterDirectory, ScheduleStore};
use mockall::mock;

// Mock store implementations for testing
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl ScheduleStore for ScheduleStore {
        async fn load(&self, master_id: MasterId) -> EngineResult<MasterSchedule>;

        async fn save(&self, master_id: MasterId, schedule: &MasterSchedule) -> EngineResult<()>;
    }
}

mock! {
    pub MasterDirectory {}

    #[async_trait]
    impl MasterDirectory for MasterDirectory {
        async fn get(&self, master_id: MasterId) -> EngineResult<Option<Master>>;

        async fn candidates(&self, specialization: &str, city: &str) -> EngineResult<Vec<Master>>;

        async fn top_rated(&self, specialization: &str, city: &str) -> EngineResult<Option<Master>>;

        async fn set_last_confirmation(
            &self,
            master_id: MasterId,
            when: DateTime<Utc>,
        ) -> EngineResult<()>;
    }
}
