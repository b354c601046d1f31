use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be between 3 and 50 characters"
    ))]
    #[schema(example = "CT King")]
    pub name: String,

    #[validate(length(
        min = 10,
        max = 100,
        message = "Address must be between 10 and 100 characters"
    ))]
    #[schema(example = "Rua das Flores 123")]
    pub address: String,

    #[validate(length(
        min = 3,
        max = 100,
        message = "Owner must be between 3 and 100 characters"
    ))]
    #[schema(example = "Joao")]
    pub owner: String,
}

/// Request payload for updating a training center. Every field is replaced.
pub type UpdateTrainingCenterRequest = CreateTrainingCenterRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.id,
            name: center.name,
            address: center.address,
            owner: center.owner,
            created_at: center.created_at,
            updated_at: center.updated_at,
        }
    }
}
