mod helpers;

use storage::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use storage::error::StorageError;
use storage::services::CategoryService;
use storage::MemoryStore;
use uuid::Uuid;

use helpers::{Hidden, HidingStore};

fn create_req(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
    }
}

fn update_req(name: &str) -> UpdateCategoryRequest {
    UpdateCategoryRequest {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let created = service.create(&create_req("Scale")).await.unwrap();
    let loaded = service.get_by_id(created.id).await.unwrap();

    assert_eq!(loaded.name, "Scale");
    assert_eq!(loaded.created_at, created.created_at);
    assert_eq!(loaded.created_at, loaded.updated_at);
}

#[tokio::test]
async fn duplicate_name_is_rejected_and_first_survives() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let first = service.create(&create_req("Scale")).await.unwrap();
    let err = service.create(&create_req("Scale")).await.unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert_eq!(store.category_count().await, 1);
    assert_eq!(service.get_by_id(first.id).await.unwrap(), first);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn list_returns_every_category() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    service.create(&create_req("Scale")).await.unwrap();
    service.create(&create_req("RX")).await.unwrap();

    let mut names: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["RX", "Scale"]);
}

#[tokio::test]
async fn update_with_unchanged_name_does_not_conflict() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let created = service.create(&create_req("Scale")).await.unwrap();
    let updated = service
        .update(created.id, &update_req("Scale"))
        .await
        .unwrap();

    assert_eq!(updated.name, "Scale");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_to_taken_name_conflicts() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    service.create(&create_req("Scale")).await.unwrap();
    let rx = service.create(&create_req("RX")).await.unwrap();

    let err = service.update(rx.id, &update_req("Scale")).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert_eq!(service.get_by_id(rx.id).await.unwrap().name, "RX");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let err = service
        .update(Uuid::new_v4(), &update_req("Scale"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let created = service.create(&create_req("Scale")).await.unwrap();
    service.delete(created.id).await.unwrap();

    let err = service.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));

    let err = service.delete(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn storage_failure_during_create_leaves_nothing_behind() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    store.fail_next_write();
    let err = service.create(&create_req("Scale")).await.unwrap_err();

    assert!(err.is_internal());
    assert_eq!(store.category_count().await, 0);

    // The name is still free afterwards.
    service.create(&create_req("Scale")).await.unwrap();
}

#[tokio::test]
async fn storage_failure_during_update_keeps_old_name() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let created = service.create(&create_req("Scale")).await.unwrap();
    store.fail_next_write();
    let err = service
        .update(created.id, &update_req("Masters"))
        .await
        .unwrap_err();

    assert!(err.is_internal());
    assert_eq!(service.get_by_id(created.id).await.unwrap().name, "Scale");
}

#[tokio::test]
async fn storage_failure_during_delete_keeps_category() {
    let store = MemoryStore::new();
    let service = CategoryService::new(&store);

    let created = service.create(&create_req("Scale")).await.unwrap();
    store.fail_next_write();
    let err = service.delete(created.id).await.unwrap_err();

    assert!(err.is_internal());
    assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn store_unique_key_catches_duplicate_name() {
    let store = MemoryStore::new();
    CategoryService::new(&store)
        .create(&create_req("Scale"))
        .await
        .unwrap();

    // The name lookup misses, so only the store's unique key stops the insert.
    let hiding = HidingStore::new(
        store.clone(),
        Hidden {
            category_names: true,
            ..Default::default()
        },
    );
    let err = CategoryService::new(&hiding)
        .create(&create_req("Scale"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert!(!err.is_internal());
    assert_eq!(store.category_count().await, 1);
}
