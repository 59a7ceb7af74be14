use async_trait::async_trait;
use eyre::Result;
use fixmatch_core::errors::{EngineError, EngineResult};
use fixmatch_core::models::{MasterId, MasterSchedule};
use fixmatch_core::store::ScheduleStore;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

pub async fn get_schedule(
    pool: &Pool<Postgres>,
    master_id: MasterId,
) -> Result<Option<MasterSchedule>> {
    tracing::debug!("Loading schedule record: master_id={}", master_id);

    let record = sqlx::query_scalar::<_, Option<Json<MasterSchedule>>>(
        r#"
        SELECT schedule
        FROM masters
        WHERE id = $1
        "#,
    )
    .bind(master_id)
    .fetch_optional(pool)
    .await?;

    // Missing row and NULL column both mean "no record yet"
    Ok(record.flatten().map(|json| json.0))
}

pub async fn save_schedule(
    pool: &Pool<Postgres>,
    master_id: MasterId,
    schedule: &MasterSchedule,
) -> Result<()> {
    tracing::debug!(
        "Saving schedule record: master_id={}, days={}",
        master_id,
        schedule.len()
    );

    let result = sqlx::query(
        r#"
        UPDATE masters
        SET schedule = $2
        WHERE id = $1
        "#,
    )
    .bind(master_id)
    .bind(Json(schedule))
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        tracing::warn!(
            "Schedule save touched no rows, master {} is not registered",
            master_id
        );
    }

    Ok(())
}

/// `ScheduleStore` backed by the `schedule` JSONB column of the masters
/// table: one serialized record per master, overwritten whole on save.
#[derive(Clone)]
pub struct PgScheduleStore {
    pool: Pool<Postgres>,
}

impl PgScheduleStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn load(&self, master_id: MasterId) -> EngineResult<MasterSchedule> {
        let record = get_schedule(&self.pool, master_id)
            .await
            .map_err(EngineError::Storage)?;
        Ok(record.unwrap_or_default())
    }

    async fn save(&self, master_id: MasterId, schedule: &MasterSchedule) -> EngineResult<()> {
        save_schedule(&self.pool, master_id, schedule)
            .await
            .map_err(EngineError::Storage)
    }
}
