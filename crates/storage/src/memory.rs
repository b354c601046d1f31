//! In-process store used by tests and by `DATABASE_URL=memory://`.
//!
//! Mirrors the constraints of the SQL schema: unique names and national ids,
//! and athletes may only point at existing parents, which in turn cannot be
//! deleted while referenced.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Athlete, Category, TrainingCenter};
use crate::store::{AthleteStore, CategoryStore, Store, TrainingCenterStore, UnitOfWork};

#[derive(Debug, Clone, Default)]
struct Tables {
    categories: BTreeMap<Uuid, Category>,
    training_centers: BTreeMap<Uuid, TrainingCenter>,
    athletes: BTreeMap<Uuid, Athlete>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    fail_next_write: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert, update or delete fail with a backend error.
    pub fn fail_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    pub async fn category_count(&self) -> usize {
        self.tables.lock().await.categories.len()
    }

    pub async fn training_center_count(&self) -> usize {
        self.tables.lock().await.training_centers.len()
    }

    pub async fn athlete_count(&self) -> usize {
        self.tables.lock().await.athletes.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = Tables::clone(&guard);

        Ok(Box::new(MemoryUnitOfWork {
            guard,
            staged,
            fail_next_write: self.fail_next_write.clone(),
        }))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Holds the table lock for its whole lifetime and works on a staged copy,
/// which replaces the shared tables only on commit.
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
    fail_next_write: Arc<AtomicBool>,
}

impl MemoryUnitOfWork {
    fn check_write(&self) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Backend("injected write failure".to_string()));
        }
        Ok(())
    }

    fn category_name_taken(&self, name: &str, except: Uuid) -> bool {
        self.staged
            .categories
            .values()
            .any(|c| c.name == name && c.id != except)
    }

    fn training_center_name_taken(&self, name: &str, except: Uuid) -> bool {
        self.staged
            .training_centers
            .values()
            .any(|c| c.name == name && c.id != except)
    }
}

fn sorted_by_name<T: Clone>(rows: &BTreeMap<Uuid, T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    let mut rows: Vec<T> = rows.values().cloned().collect();
    rows.sort_by(|a, b| name(a).cmp(name(b)));
    rows
}

#[async_trait]
impl CategoryStore for MemoryUnitOfWork {
    async fn insert_category(&mut self, category: &Category) -> Result<()> {
        self.check_write()?;
        if self.category_name_taken(&category.name, category.id) {
            return Err(StorageError::ConstraintViolation(
                "Category name already exists".to_string(),
            ));
        }
        self.staged
            .categories
            .insert(category.id, category.clone());
        Ok(())
    }

    async fn find_category_by_id(&mut self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.staged.categories.get(&id).cloned())
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        Ok(self
            .staged
            .categories
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn list_categories(&mut self) -> Result<Vec<Category>> {
        Ok(sorted_by_name(&self.staged.categories, |c| c.name.as_str()))
    }

    async fn update_category(&mut self, category: &Category) -> Result<bool> {
        self.check_write()?;
        if !self.staged.categories.contains_key(&category.id) {
            return Ok(false);
        }
        if self.category_name_taken(&category.name, category.id) {
            return Err(StorageError::ConstraintViolation(
                "Category name already exists".to_string(),
            ));
        }
        self.staged
            .categories
            .insert(category.id, category.clone());
        Ok(true)
    }

    async fn delete_category(&mut self, id: Uuid) -> Result<bool> {
        self.check_write()?;
        if self.staged.athletes.values().any(|a| a.category_id == id) {
            return Err(StorageError::ConstraintViolation(
                "Category is still referenced by athletes".to_string(),
            ));
        }
        Ok(self.staged.categories.remove(&id).is_some())
    }
}

#[async_trait]
impl TrainingCenterStore for MemoryUnitOfWork {
    async fn insert_training_center(&mut self, center: &TrainingCenter) -> Result<()> {
        self.check_write()?;
        if self.training_center_name_taken(&center.name, center.id) {
            return Err(StorageError::ConstraintViolation(
                "Training center name already exists".to_string(),
            ));
        }
        self.staged
            .training_centers
            .insert(center.id, center.clone());
        Ok(())
    }

    async fn find_training_center_by_id(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        Ok(self.staged.training_centers.get(&id).cloned())
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        Ok(self
            .staged
            .training_centers
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>> {
        Ok(sorted_by_name(&self.staged.training_centers, |c| c.name.as_str()))
    }

    async fn update_training_center(&mut self, center: &TrainingCenter) -> Result<bool> {
        self.check_write()?;
        if !self.staged.training_centers.contains_key(&center.id) {
            return Ok(false);
        }
        if self.training_center_name_taken(&center.name, center.id) {
            return Err(StorageError::ConstraintViolation(
                "Training center name already exists".to_string(),
            ));
        }
        self.staged
            .training_centers
            .insert(center.id, center.clone());
        Ok(true)
    }

    async fn delete_training_center(&mut self, id: Uuid) -> Result<bool> {
        self.check_write()?;
        if self
            .staged
            .athletes
            .values()
            .any(|a| a.training_center_id == id)
        {
            return Err(StorageError::ConstraintViolation(
                "Training center is still referenced by athletes".to_string(),
            ));
        }
        Ok(self.staged.training_centers.remove(&id).is_some())
    }
}

#[async_trait]
impl AthleteStore for MemoryUnitOfWork {
    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        self.check_write()?;
        if self
            .staged
            .athletes
            .values()
            .any(|a| a.national_id == athlete.national_id)
        {
            return Err(StorageError::ConstraintViolation(
                "An athlete with this national id already exists".to_string(),
            ));
        }
        if !self.staged.categories.contains_key(&athlete.category_id)
            || !self
                .staged
                .training_centers
                .contains_key(&athlete.training_center_id)
        {
            return Err(StorageError::ConstraintViolation(
                "Referenced category or training center does not exist".to_string(),
            ));
        }
        self.staged.athletes.insert(athlete.id, athlete.clone());
        Ok(())
    }

    async fn find_athlete_by_id(&mut self, id: Uuid) -> Result<Option<Athlete>> {
        Ok(self.staged.athletes.get(&id).cloned())
    }

    async fn find_athlete_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Athlete>> {
        Ok(self
            .staged
            .athletes
            .values()
            .find(|a| a.national_id == national_id)
            .cloned())
    }

    async fn list_athletes(&mut self) -> Result<Vec<Athlete>> {
        Ok(sorted_by_name(&self.staged.athletes, |a| a.name.as_str()))
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool> {
        self.check_write()?;
        match self.staged.athletes.get_mut(&athlete.id) {
            Some(existing) => {
                existing.name = athlete.name.clone();
                existing.age = athlete.age;
                existing.weight = athlete.weight;
                existing.height = athlete.height;
                existing.updated_at = athlete.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool> {
        self.check_write()?;
        Ok(self.staged.athletes.remove(&id).is_some())
    }

    async fn count_athletes_by_category(&mut self, category_id: Uuid) -> Result<i64> {
        let count = self
            .staged
            .athletes
            .values()
            .filter(|a| a.category_id == category_id)
            .count();
        Ok(count as i64)
    }

    async fn count_athletes_by_training_center(
        &mut self,
        training_center_id: Uuid,
    ) -> Result<i64> {
        let count = self
            .staged
            .athletes
            .values()
            .filter(|a| a.training_center_id == training_center_id)
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<()> {
        let MemoryUnitOfWork {
            mut guard, staged, ..
        } = *self;
        *guard = staged;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
