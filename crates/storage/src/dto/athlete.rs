use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::category::CategoryResponse;
use super::training_center::TrainingCenterResponse;
use crate::models::{Athlete, Category, TrainingCenter};

/// Athlete with its category and training center embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResponse {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category: CategoryResponse,
    pub training_center: TrainingCenterResponse,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AthleteResponse {
    pub fn compose(athlete: Athlete, category: Category, training_center: TrainingCenter) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            national_id: athlete.national_id,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: category.into(),
            training_center: training_center.into(),
            created_at: athlete.created_at,
            updated_at: athlete.updated_at,
        }
    }
}

/// Request payload for creating a new athlete.
///
/// Category and training center are given by name and resolved to ids before
/// anything is written.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name must be between 3 and 100 characters"
    ))]
    #[schema(example = "Joao Silva")]
    pub name: String,

    #[validate(length(equal = 11, message = "National id must have exactly 11 characters"))]
    #[schema(example = "12345678901")]
    pub national_id: String,

    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    #[schema(example = 25)]
    pub age: i32,

    #[validate(range(min = 30.0, max = 200.0, message = "Weight must be between 30 and 200"))]
    #[schema(example = 70.5)]
    pub weight: f64,

    #[validate(range(min = 1.5, max = 2.5, message = "Height must be between 1.5 and 2.5"))]
    #[schema(example = 1.75)]
    pub height: f64,

    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    #[schema(example = "M")]
    pub sex: String,

    /// Resolved against stored categories; an unknown name is a reference error.
    #[schema(example = "Scale")]
    pub category_name: String,

    #[schema(example = "CT King")]
    pub training_center_name: String,
}

/// Request payload for a partial athlete update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 18, max = 100))]
    pub age: Option<i32>,

    #[validate(range(min = 30.0, max = 200.0))]
    pub weight: Option<f64>,

    #[validate(range(min = 1.5, max = 2.5))]
    pub height: Option<f64>,
}

impl UpdateAthleteRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.weight.is_none() && self.height.is_none()
    }

    /// Copy the supplied fields onto `athlete`.
    pub fn apply_to(&self, athlete: &mut Athlete) {
        if let Some(name) = &self.name {
            athlete.name = name.clone();
        }
        if let Some(age) = self.age {
            athlete.age = age;
        }
        if let Some(weight) = self.weight {
            athlete.weight = weight;
        }
        if let Some(height) = self.height {
            athlete.height = height;
        }
    }
}
