//! Storage interface consumed by the entity services.
//!
//! A [`Store`] hands out [`UnitOfWork`]s. Every read and write a service
//! performs for one operation goes through a single unit of work, which is then
//! committed or rolled back as a whole.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Athlete, Category, TrainingCenter};

#[async_trait]
pub trait CategoryStore: Send {
    async fn insert_category(&mut self, category: &Category) -> Result<()>;

    async fn find_category_by_id(&mut self, id: Uuid) -> Result<Option<Category>>;

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>>;

    async fn list_categories(&mut self) -> Result<Vec<Category>>;

    /// Returns `false` when no row has the category's id.
    async fn update_category(&mut self, category: &Category) -> Result<bool>;

    /// Returns `false` when no row has the id.
    async fn delete_category(&mut self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait TrainingCenterStore: Send {
    async fn insert_training_center(&mut self, center: &TrainingCenter) -> Result<()>;

    async fn find_training_center_by_id(&mut self, id: Uuid) -> Result<Option<TrainingCenter>>;

    async fn find_training_center_by_name(&mut self, name: &str)
    -> Result<Option<TrainingCenter>>;

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>>;

    async fn update_training_center(&mut self, center: &TrainingCenter) -> Result<bool>;

    async fn delete_training_center(&mut self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait AthleteStore: Send {
    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()>;

    async fn find_athlete_by_id(&mut self, id: Uuid) -> Result<Option<Athlete>>;

    async fn find_athlete_by_national_id(&mut self, national_id: &str)
    -> Result<Option<Athlete>>;

    async fn list_athletes(&mut self) -> Result<Vec<Athlete>>;

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool>;

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool>;

    async fn count_athletes_by_category(&mut self, category_id: Uuid) -> Result<i64>;

    async fn count_athletes_by_training_center(&mut self, training_center_id: Uuid)
    -> Result<i64>;
}

/// An atomic batch of reads and writes. Dropping it without committing
/// discards every write.
#[async_trait]
pub trait UnitOfWork: CategoryStore + TrainingCenterStore + AthleteStore + Send {
    async fn commit(self: Box<Self>) -> Result<()>;

    async fn rollback(self: Box<Self>) -> Result<()>;
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>>;

    /// Cheap round trip proving the backend is reachable.
    async fn health_check(&self) -> Result<()>;
}

/// Commit `uow` if `result` is `Ok`, roll it back otherwise.
///
/// The error carried by `result` is always the one returned; a failing rollback is only
/// logged.
pub async fn finish<T>(uow: Box<dyn UnitOfWork>, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if error.is_internal() {
                tracing::warn!("Rolling back unit of work after error: {}", error);
            }
            if let Err(rollback_error) = uow.rollback().await {
                tracing::error!("Rollback failed: {}", rollback_error);
            }
            Err(error)
        }
    }
}
