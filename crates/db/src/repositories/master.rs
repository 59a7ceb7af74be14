use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use fixmatch_core::errors::{EngineError, EngineResult};
use fixmatch_core::models::{Master, MasterId};
use fixmatch_core::store::MasterDirectory;
use sqlx::{Pool, Postgres};

use crate::models::DbMaster;

const MASTER_COLUMNS: &str =
    "id, full_name, phone, specializations, city, rating, is_active, \
     last_schedule_confirmation, created_at";

pub async fn create_master(
    pool: &Pool<Postgres>,
    full_name: &str,
    phone: &str,
    specializations: &[String],
    city: &str,
) -> Result<DbMaster> {
    tracing::debug!(
        "Creating master: name={}, city={}, specializations={:?}",
        full_name,
        city,
        specializations
    );

    let master = sqlx::query_as::<_, DbMaster>(&format!(
        r#"
        INSERT INTO masters (full_name, phone, specializations, city)
        VALUES ($1, $2, $3, $4)
        RETURNING {MASTER_COLUMNS}
        "#,
    ))
    .bind(full_name)
    .bind(phone)
    .bind(serde_json::json!(specializations))
    .bind(city)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Master created successfully: id={}", master.id);
    Ok(master)
}

pub async fn get_master_by_id(pool: &Pool<Postgres>, id: MasterId) -> Result<Option<DbMaster>> {
    let master = sqlx::query_as::<_, DbMaster>(&format!(
        r#"
        SELECT {MASTER_COLUMNS}
        FROM masters
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(master)
}

/// Active masters in a city carrying the specialization tag, ordered by
/// ascending id. The tag must be an exact member of the specializations
/// array, not a substring.
pub async fn list_candidates(
    pool: &Pool<Postgres>,
    specialization: &str,
    city: &str,
) -> Result<Vec<DbMaster>> {
    tracing::debug!(
        "Listing candidate masters: specialization={}, city={}",
        specialization,
        city
    );

    let masters = sqlx::query_as::<_, DbMaster>(&format!(
        r#"
        SELECT {MASTER_COLUMNS}
        FROM masters
        WHERE is_active
        AND city = $1
        AND specializations @> $2
        ORDER BY id ASC
        "#,
    ))
    .bind(city)
    .bind(serde_json::json!([specialization]))
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} candidate masters", masters.len());
    Ok(masters)
}

pub async fn top_rated_master(
    pool: &Pool<Postgres>,
    specialization: &str,
    city: &str,
) -> Result<Option<DbMaster>> {
    let master = sqlx::query_as::<_, DbMaster>(&format!(
        r#"
        SELECT {MASTER_COLUMNS}
        FROM masters
        WHERE is_active
        AND city = $1
        AND specializations @> $2
        ORDER BY rating DESC, id ASC
        LIMIT 1
        "#,
    ))
    .bind(city)
    .bind(serde_json::json!([specialization]))
    .fetch_optional(pool)
    .await?;

    Ok(master)
}

/// Returns false when no master row was updated.
pub async fn set_last_confirmation(
    pool: &Pool<Postgres>,
    id: MasterId,
    when: DateTime<Utc>,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE masters
        SET last_schedule_confirmation = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(when)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// `MasterDirectory` backed by the masters table.
#[derive(Clone)]
pub struct PgMasterDirectory {
    pool: Pool<Postgres>,
}

impl PgMasterDirectory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MasterDirectory for PgMasterDirectory {
    async fn get(&self, master_id: MasterId) -> EngineResult<Option<Master>> {
        let master = get_master_by_id(&self.pool, master_id)
            .await
            .map_err(EngineError::Storage)?;
        Ok(master.map(Master::from))
    }

    async fn candidates(&self, specialization: &str, city: &str) -> EngineResult<Vec<Master>> {
        let masters = list_candidates(&self.pool, specialization, city)
            .await
            .map_err(EngineError::Storage)?;
        Ok(masters.into_iter().map(Master::from).collect())
    }

    async fn top_rated(&self, specialization: &str, city: &str) -> EngineResult<Option<Master>> {
        let master = top_rated_master(&self.pool, specialization, city)
            .await
            .map_err(EngineError::Storage)?;
        Ok(master.map(Master::from))
    }

    async fn set_last_confirmation(
        &self,
        master_id: MasterId,
        when: DateTime<Utc>,
    ) -> EngineResult<()> {
        let updated = set_last_confirmation(&self.pool, master_id, when)
            .await
            .map_err(EngineError::Storage)?;

        if !updated {
            return Err(EngineError::NotFound(format!(
                "Master with id {} not found",
                master_id
            )));
        }
        Ok(())
    }
}
