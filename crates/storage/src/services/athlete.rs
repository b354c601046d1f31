use uuid::Uuid;

use super::{category, training_center};
use crate::dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, timestamp};
use crate::store::{Store, UnitOfWork, finish};

/// Athlete workflow. Category and training center are resolved through their
/// own services' resolvers; responses always embed both records.
pub struct AthleteService<'a> {
    store: &'a dyn Store,
}

impl<'a> AthleteService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Create a new athlete
    pub async fn create(&self, request: &CreateAthleteRequest) -> Result<AthleteResponse> {
        let mut uow = self.store.begin().await?;
        let result = create(&mut *uow, request).await;
        finish(uow, result).await
    }

    /// List all athletes with their category and training center
    pub async fn list(&self) -> Result<Vec<AthleteResponse>> {
        let mut uow = self.store.begin().await?;
        let result = list(&mut *uow).await;
        finish(uow, result).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AthleteResponse> {
        let mut uow = self.store.begin().await?;
        let result = get(&mut *uow, id).await;
        finish(uow, result).await
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, request: &UpdateAthleteRequest) -> Result<AthleteResponse> {
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

async fn find(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<Athlete> {
    uow.find_athlete_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// Resolve both references of a stored athlete and build the response
async fn embed(uow: &mut dyn UnitOfWork, athlete: Athlete) -> Result<AthleteResponse> {
    let category = category::resolve_id(uow, athlete.category_id).await?;
    let training_center = training_center::resolve_id(uow, athlete.training_center_id).await?;

    Ok(AthleteResponse::compose(athlete, category, training_center))
}

async fn create(
    uow: &mut dyn UnitOfWork,
    request: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let category = category::resolve_name(uow, &request.category_name).await?;
    let training_center =
        training_center::resolve_name(uow, &request.training_center_name).await?;

    if uow
        .find_athlete_by_national_id(&request.national_id)
        .await?
        .is_some()
    {
        return Err(StorageError::ConstraintViolation(format!(
            "An athlete with national id {} already exists",
            request.national_id
        )));
    }

    let now = timestamp();
    let athlete = Athlete {
        id: Uuid::new_v4(),
        name: request.name.clone(),
        national_id: request.national_id.clone(),
        age: request.age,
        weight: request.weight,
        height: request.height,
        sex: request.sex.clone(),
        category_id: category.id,
        training_center_id: training_center.id,
        created_at: now,
        updated_at: now,
    };
    uow.insert_athlete(&athlete).await?;

    // Read back what the store actually holds rather than echoing the input.
    let persisted = uow.find_athlete_by_id(athlete.id).await?.ok_or_else(|| {
        StorageError::Inconsistent(format!("athlete {} vanished after insert", athlete.id))
    })?;

    tracing::info!(
        athlete_id = %persisted.id,
        category = %category.name,
        training_center = %training_center.name,
        "Athlete created"
    );

    Ok(AthleteResponse::compose(persisted, category, training_center))
}

async fn list(uow: &mut dyn UnitOfWork) -> Result<Vec<AthleteResponse>> {
    let athletes = uow.list_athletes().await?;

    let mut responses = Vec::with_capacity(athletes.len());
    for athlete in athletes {
        responses.push(embed(uow, athlete).await?);
    }

    Ok(responses)
}

async fn get(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<AthleteResponse> {
    let athlete = find(uow, id).await?;
    embed(uow, athlete).await
}

async fn update(
    uow: &mut dyn UnitOfWork,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let mut athlete = find(uow, id).await?;

    if !request.is_empty() {
        request.apply_to(&mut athlete);
        athlete.updated_at = timestamp();

        if !uow.update_athlete(&athlete).await? {
            return Err(StorageError::NotFound);
        }

        tracing::info!(athlete_id = %athlete.id, "Athlete updated");
    }

    embed(uow, athlete).await
}

async fn delete(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<()> {
    if !uow.delete_athlete(id).await? {
        return Err(StorageError::NotFound);
    }

    tracing::info!(athlete_id = %id, "Athlete deleted");
    Ok(())
}
