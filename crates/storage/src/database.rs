use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Athlete, Category, TrainingCenter};
use crate::repository::athlete::AthleteRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::training_center::TrainingCenterRepository;
use crate::store::{AthleteStore, CategoryStore, Store, TrainingCenterStore, UnitOfWork};

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for Database {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// A unit of work backed by a single PostgreSQL transaction.
///
/// Dropping it without calling `commit` rolls the transaction back.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl CategoryStore for PgUnitOfWork {
    async fn insert_category(&mut self, category: &Category) -> Result<()> {
        CategoryRepository::new(&mut self.tx).insert(category).await
    }

    async fn find_category_by_id(&mut self, id: Uuid) -> Result<Option<Category>> {
        CategoryRepository::new(&mut self.tx).find_by_id(id).await
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::new(&mut self.tx).find_by_name(name).await
    }

    async fn list_categories(&mut self) -> Result<Vec<Category>> {
        CategoryRepository::new(&mut self.tx).list().await
    }

    async fn update_category(&mut self, category: &Category) -> Result<bool> {
        CategoryRepository::new(&mut self.tx).update(category).await
    }

    async fn delete_category(&mut self, id: Uuid) -> Result<bool> {
        CategoryRepository::new(&mut self.tx).delete(id).await
    }
}

#[async_trait]
impl TrainingCenterStore for PgUnitOfWork {
    async fn insert_training_center(&mut self, center: &TrainingCenter) -> Result<()> {
        TrainingCenterRepository::new(&mut self.tx)
            .insert(center)
            .await
    }

    async fn find_training_center_by_id(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(&mut self.tx)
            .find_by_id(id)
            .await
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(&mut self.tx)
            .find_by_name(name)
            .await
    }

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>> {
        TrainingCenterRepository::new(&mut self.tx).list().await
    }

    async fn update_training_center(&mut self, center: &TrainingCenter) -> Result<bool> {
        TrainingCenterRepository::new(&mut self.tx)
            .update(center)
            .await
    }

    async fn delete_training_center(&mut self, id: Uuid) -> Result<bool> {
        TrainingCenterRepository::new(&mut self.tx).delete(id).await
    }
}

#[async_trait]
impl AthleteStore for PgUnitOfWork {
    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        AthleteRepository::new(&mut self.tx).insert(athlete).await
    }

    async fn find_athlete_by_id(&mut self, id: Uuid) -> Result<Option<Athlete>> {
        AthleteRepository::new(&mut self.tx).find_by_id(id).await
    }

    async fn find_athlete_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Athlete>> {
        AthleteRepository::new(&mut self.tx)
            .find_by_national_id(national_id)
            .await
    }

    async fn list_athletes(&mut self) -> Result<Vec<Athlete>> {
        AthleteRepository::new(&mut self.tx).list().await
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool> {
        AthleteRepository::new(&mut self.tx).update(athlete).await
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool> {
        AthleteRepository::new(&mut self.tx).delete(id).await
    }

    async fn count_athletes_by_category(&mut self, category_id: Uuid) -> Result<i64> {
        AthleteRepository::new(&mut self.tx)
            .count_by_category(category_id)
            .await
    }

    async fn count_athletes_by_training_center(
        &mut self,
        training_center_id: Uuid,
    ) -> Result<i64> {
        AthleteRepository::new(&mut self.tx)
            .count_by_training_center(training_center_id)
            .await
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
