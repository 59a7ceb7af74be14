use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create masters table. The whole schedule record lives in one JSONB
    // column per row; the matching core reads and rewrites it as a unit.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS masters (
            id BIGSERIAL PRIMARY KEY,
            full_name VARCHAR(255) NOT NULL,
            phone VARCHAR(32) UNIQUE NOT NULL,
            specializations JSONB NOT NULL DEFAULT '[]'::jsonb,
            city VARCHAR(255) NOT NULL,
            rating DOUBLE PRECISION NOT NULL DEFAULT 5.0,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            schedule JSONB NULL,
            last_schedule_confirmation TIMESTAMP WITH TIME ZONE NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_masters_city ON masters(city);
        CREATE INDEX IF NOT EXISTS idx_masters_is_active ON masters(is_active);
        CREATE INDEX IF NOT EXISTS idx_masters_specializations ON masters USING GIN (specializations);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
