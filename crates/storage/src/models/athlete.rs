use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored athlete row. References its category and training center by id only;
/// responses embed the full records through explicit resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
