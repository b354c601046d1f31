use uuid::Uuid;

use crate::dto::training_center::{CreateTrainingCenterRequest, UpdateTrainingCenterRequest};
use crate::error::{Result, StorageError};
use crate::models::{TrainingCenter, timestamp};
use crate::store::{Store, UnitOfWork, finish};

pub struct TrainingCenterService<'a> {
    store: &'a dyn Store,
}

impl<'a> TrainingCenterService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let mut uow = self.store.begin().await?;
        let result = create(&mut *uow, request).await;
        finish(uow, result).await
    }

    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let mut uow = self.store.begin().await?;
        let result = uow.list_training_centers().await;
        finish(uow, result).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let mut uow = self.store.begin().await?;
        let result = find(&mut *uow, id).await;
        finish(uow, result).await
    }

    /// Replace name, address and owner of a training center
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateTrainingCenterRequest,
    ) -> Result<TrainingCenter> {
        let mut uow = self.store.begin().await?;
        let result = update(&mut *uow, id, request).await;
        finish(uow, result).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut uow = self.store.begin().await?;
        let result = delete(&mut *uow, id).await;
        finish(uow, result).await
    }
}

pub async fn resolve_name(uow: &mut dyn UnitOfWork, name: &str) -> Result<TrainingCenter> {
    uow.find_training_center_by_name(name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            entity: "trainingCenter",
            name: name.to_string(),
        })
}

pub async fn resolve_id(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<TrainingCenter> {
    uow.find_training_center_by_id(id)
        .await?
        .ok_or_else(|| StorageError::Inconsistent(format!("training center {} is missing", id)))
}

async fn find(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<TrainingCenter> {
    uow.find_training_center_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

fn duplicate_name(name: &str) -> StorageError {
    StorageError::ConstraintViolation(format!(
        "A training center named '{}' already exists",
        name
    ))
}

async fn create(
    uow: &mut dyn UnitOfWork,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    if uow
        .find_training_center_by_name(&request.name)
        .await?
        .is_some()
    {
        return Err(duplicate_name(&request.name));
    }

    let center = TrainingCenter::new(&request.name, &request.address, &request.owner);
    uow.insert_training_center(&center).await?;

    tracing::info!(training_center_id = %center.id, name = %center.name, "Training center created");
    Ok(center)
}

async fn update(
    uow: &mut dyn UnitOfWork,
    id: Uuid,
    request: &UpdateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let mut center = find(uow, id).await?;

    if center.name != request.name
        && uow
            .find_training_center_by_name(&request.name)
            .await?
            .is_some()
    {
        return Err(duplicate_name(&request.name));
    }

    center.name = request.name.clone();
    center.address = request.address.clone();
    center.owner = request.owner.clone();
    center.updated_at = timestamp();

    if !uow.update_training_center(&center).await? {
        return Err(StorageError::NotFound);
    }

    tracing::info!(training_center_id = %center.id, "Training center updated");
    Ok(center)
}

async fn delete(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<()> {
    find(uow, id).await?;

    let athletes = uow.count_athletes_by_training_center(id).await?;
    if athletes > 0 {
        return Err(StorageError::ConstraintViolation(format!(
            "Training center is still referenced by {} athlete(s)",
            athletes
        )));
    }

    if !uow.delete_training_center(id).await? {
        return Err(StorageError::NotFound);
    }

    tracing::info!(training_center_id = %id, "Training center deleted");
    Ok(())
}
