use chrono::{DateTime, Utc};
use fixmatch_core::models::Master;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMaster {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    pub specializations: Json<Vec<String>>,
    pub city: String,
    pub rating: f64,
    pub is_active: bool,
    pub last_schedule_confirmation: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbMaster> for Master {
    fn from(row: DbMaster) -> Self {
        Master {
            id: row.id,
            full_name: row.full_name,
            phone: row.phone,
            specializations: row.specializations.0,
            city: row.city,
            rating: row.rating,
            is_active: row.is_active,
            last_schedule_confirmation: row.last_schedule_confirmation,
        }
    }
}
