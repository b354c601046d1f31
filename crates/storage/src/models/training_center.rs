use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrainingCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TrainingCenter {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let now = timestamp();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            owner: owner.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
