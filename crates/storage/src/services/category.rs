use uuid::Uuid;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::{Category, timestamp};
use crate::store::{Store, UnitOfWork, finish};

pub struct CategoryService<'a> {
    store: &'a dyn Store,
}

impl<'a> CategoryService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Create a new category with a unique name
    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<Category> {
        let mut uow = self.store.begin().await?;
        let result = create(&mut *uow, request).await;
        finish(uow, result).await
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let mut uow = self.store.begin().await?;
        let result = uow.list_categories().await;
        finish(uow, result).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Category> {
        let mut uow = self.store.begin().await?;
        let result = find(&mut *uow, id).await;
        finish(uow, result).await
    }

    /// Rename a category
    pub async fn update(&self, id: Uuid, request: &UpdateCategoryRequest) -> Result<Category> {
        let mut uow = self.store.begin().await?;
        let result = update(&mut *uow, id, request).await;
        finish(uow, result).await
    }

    /// Delete a category no athlete refers to
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut uow = self.store.begin().await?;
        let result = delete(&mut *uow, id).await;
        finish(uow, result).await
    }
}

/// Resolve a category name given on an incoming request.
pub async fn resolve_name(uow: &mut dyn UnitOfWork, name: &str) -> Result<Category> {
    uow.find_category_by_name(name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            entity: "category",
            name: name.to_string(),
        })
}

/// Resolve the category an existing athlete points at.
pub async fn resolve_id(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<Category> {
    uow.find_category_by_id(id)
        .await?
        .ok_or_else(|| StorageError::Inconsistent(format!("category {} is missing", id)))
}

async fn find(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<Category> {
    uow.find_category_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

fn duplicate_name(name: &str) -> StorageError {
    StorageError::ConstraintViolation(format!("A category named '{}' already exists", name))
}

async fn create(uow: &mut dyn UnitOfWork, request: &CreateCategoryRequest) -> Result<Category> {
    if uow.find_category_by_name(&request.name).await?.is_some() {
        return Err(duplicate_name(&request.name));
    }

    let category = Category::new(&request.name);
    uow.insert_category(&category).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");
    Ok(category)
}

async fn update(
    uow: &mut dyn UnitOfWork,
    id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<Category> {
    let mut category = find(uow, id).await?;

    if category.name != request.name && uow.find_category_by_name(&request.name).await?.is_some()
    {
        return Err(duplicate_name(&request.name));
    }

    category.name = request.name.clone();
    category.updated_at = timestamp();

    if !uow.update_category(&category).await? {
        return Err(StorageError::NotFound);
    }

    tracing::info!(category_id = %category.id, "Category updated");
    Ok(category)
}

async fn delete(uow: &mut dyn UnitOfWork, id: Uuid) -> Result<()> {
    find(uow, id).await?;

    let athletes = uow.count_athletes_by_category(id).await?;
    if athletes > 0 {
        return Err(StorageError::ConstraintViolation(format!(
            "Category is still referenced by {} athlete(s)",
            athletes
        )));
    }

    if !uow.delete_category(id).await? {
        return Err(StorageError::NotFound);
    }

    tracing::info!(category_id = %id, "Category deleted");
    Ok(())
}
