#![allow(dead_code)]

use async_trait::async_trait;
use storage::error::Result;
use storage::models::{Athlete, Category, TrainingCenter};
use storage::store::{AthleteStore, CategoryStore, Store, TrainingCenterStore, UnitOfWork};
use storage::MemoryStore;
use uuid::Uuid;

/// Lookups a [`HidingStore`] pretends find nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hidden {
    pub category_ids: bool,
    pub category_names: bool,
    pub training_center_names: bool,
    pub national_ids: bool,
}

/// A `MemoryStore` whose units of work answer some lookups with `None`
/// while every write still goes through the memory store's constraints.
pub struct HidingStore {
    pub inner: MemoryStore,
    pub hidden: Hidden,
}

impl HidingStore {
    pub fn new(inner: MemoryStore, hidden: Hidden) -> Self {
        Self { inner, hidden }
    }
}

#[async_trait]
impl Store for HidingStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>> {
        let inner = self.inner.begin().await?;
        Ok(Box::new(HidingUnitOfWork {
            inner,
            hidden: self.hidden,
        }))
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }
}

struct HidingUnitOfWork {
    inner: Box<dyn UnitOfWork>,
    hidden: Hidden,
}

#[async_trait]
impl CategoryStore for HidingUnitOfWork {
    async fn insert_category(&mut self, category: &Category) -> Result<()> {
        self.inner.insert_category(category).await
    }

    async fn find_category_by_id(&mut self, id: Uuid) -> Result<Option<Category>> {
        if self.hidden.category_ids {
            return Ok(None);
        }
        self.inner.find_category_by_id(id).await
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        if self.hidden.category_names {
            return Ok(None);
        }
        self.inner.find_category_by_name(name).await
    }

    async fn list_categories(&mut self) -> Result<Vec<Category>> {
        self.inner.list_categories().await
    }

    async fn update_category(&mut self, category: &Category) -> Result<bool> {
        self.inner.update_category(category).await
    }

    async fn delete_category(&mut self, id: Uuid) -> Result<bool> {
        self.inner.delete_category(id).await
    }
}

#[async_trait]
impl TrainingCenterStore for HidingUnitOfWork {
    async fn insert_training_center(&mut self, center: &TrainingCenter) -> Result<()> {
        self.inner.insert_training_center(center).await
    }

    async fn find_training_center_by_id(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        self.inner.find_training_center_by_id(id).await
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        if self.hidden.training_center_names {
            return Ok(None);
        }
        self.inner.find_training_center_by_name(name).await
    }

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>> {
        self.inner.list_training_centers().await
    }

    async fn update_training_center(&mut self, center: &TrainingCenter) -> Result<bool> {
        self.inner.update_training_center(center).await
    }

    async fn delete_training_center(&mut self, id: Uuid) -> Result<bool> {
        self.inner.delete_training_center(id).await
    }
}

#[async_trait]
impl AthleteStore for HidingUnitOfWork {
    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        self.inner.insert_athlete(athlete).await
    }

    async fn find_athlete_by_id(&mut self, id: Uuid) -> Result<Option<Athlete>> {
        self.inner.find_athlete_by_id(id).await
    }

    async fn find_athlete_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Athlete>> {
        if self.hidden.national_ids {
            return Ok(None);
        }
        self.inner.find_athlete_by_national_id(national_id).await
    }

    async fn list_athletes(&mut self) -> Result<Vec<Athlete>> {
        self.inner.list_athletes().await
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool> {
        self.inner.update_athlete(athlete).await
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool> {
        self.inner.delete_athlete(id).await
    }

    async fn count_athletes_by_category(&mut self, category_id: Uuid) -> Result<i64> {
        self.inner.count_athletes_by_category(category_id).await
    }

    async fn count_athletes_by_training_center(
        &mut self,
        training_center_id: Uuid,
    ) -> Result<i64> {
        self.inner
            .count_athletes_by_training_center(training_center_id)
            .await
    }
}

#[async_trait]
impl UnitOfWork for HidingUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.inner.rollback().await
    }
}
