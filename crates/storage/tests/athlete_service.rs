mod helpers;

use storage::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use storage::dto::category::CreateCategoryRequest;
use storage::dto::training_center::CreateTrainingCenterRequest;
use storage::error::StorageError;
use storage::services::{AthleteService, CategoryService, TrainingCenterService};
use storage::MemoryStore;
use uuid::Uuid;

use helpers::{Hidden, HidingStore};

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();

    CategoryService::new(&store)
        .create(&CreateCategoryRequest {
            name: "Scale".into(),
        })
        .await
        .unwrap();
    TrainingCenterService::new(&store)
        .create(&CreateTrainingCenterRequest {
            name: "CT1".into(),
            address: "Rua das Flores 123".into(),
            owner: "Joao".into(),
        })
        .await
        .unwrap();

    store
}

fn joao() -> CreateAthleteRequest {
    CreateAthleteRequest {
        name: "Joao Silva".into(),
        national_id: "12345678901".into(),
        age: 25,
        weight: 70.5,
        height: 1.75,
        sex: "M".into(),
        category_name: "Scale".into(),
        training_center_name: "CT1".into(),
    }
}

#[tokio::test]
async fn create_embeds_category_and_training_center() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let athlete = service.create(&joao()).await.unwrap();

    assert_eq!(athlete.name, "Joao Silva");
    assert_eq!(athlete.national_id, "12345678901");
    assert_eq!(athlete.category.name, "Scale");
    assert_eq!(athlete.training_center.name, "CT1");
    assert_eq!(athlete.created_at, athlete.updated_at);
}

#[tokio::test]
async fn unknown_category_is_a_reference_error_without_writes() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let mut req = joao();
    req.category_name = "Unknown".into();
    let err = service.create(&req).await.unwrap_err();

    match err {
        StorageError::ReferenceNotFound { entity, name } => {
            assert_eq!(entity, "category");
            assert_eq!(name, "Unknown");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.athlete_count().await, 0);
}

#[tokio::test]
async fn unknown_training_center_is_a_reference_error() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let mut req = joao();
    req.training_center_name = "CT9".into();
    let err = service.create(&req).await.unwrap_err();

    assert!(matches!(
        err,
        StorageError::ReferenceNotFound {
            entity: "trainingCenter",
            ..
        }
    ));
    assert_eq!(store.athlete_count().await, 0);
}

#[tokio::test]
async fn category_is_resolved_before_training_center() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let mut req = joao();
    req.category_name = "Unknown".into();
    req.training_center_name = "CT9".into();
    let err = service.create(&req).await.unwrap_err();

    assert!(matches!(
        err,
        StorageError::ReferenceNotFound {
            entity: "category",
            ..
        }
    ));
}

#[tokio::test]
async fn duplicate_national_id_conflicts() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    service.create(&joao()).await.unwrap();

    let mut second = joao();
    second.name = "Maria Souza".into();
    let err = service.create(&second).await.unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert_eq!(store.athlete_count().await, 1);
}

#[tokio::test]
async fn storage_failure_on_insert_rolls_back() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    store.fail_next_write();
    let err = service.create(&joao()).await.unwrap_err();

    assert!(err.is_internal());
    assert_eq!(store.athlete_count().await, 0);
    service.create(&joao()).await.unwrap();
}

#[tokio::test]
async fn list_and_get_embed_references() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    let loaded = service.get_by_id(created.id).await.unwrap();
    assert_eq!(loaded.category.name, "Scale");
    assert_eq!(loaded.training_center.name, "CT1");
}

#[tokio::test]
async fn get_unknown_athlete_is_not_found() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn partial_update_only_touches_given_fields() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();
    let updated = service
        .update(
            created.id,
            &UpdateAthleteRequest {
                weight: Some(72.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.weight, 72.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.age, created.age);
    assert_eq!(updated.height, created.height);
    assert_eq!(updated.category.id, created.category.id);
    assert_eq!(updated.training_center.id, created.training_center.id);
    assert!(updated.updated_at >= created.updated_at);

    let reloaded = service.get_by_id(created.id).await.unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn empty_update_changes_nothing() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();
    let unchanged = service
        .update(created.id, &UpdateAthleteRequest::default())
        .await
        .unwrap();

    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn update_unknown_athlete_is_not_found() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let err = service
        .update(
            Uuid::new_v4(),
            &UpdateAthleteRequest {
                age: Some(30),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn delete_removes_athlete() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();
    service.delete(created.id).await.unwrap();

    assert!(matches!(
        service.get_by_id(created.id).await.unwrap_err(),
        StorageError::NotFound
    ));
    assert!(matches!(
        service.delete(created.id).await.unwrap_err(),
        StorageError::NotFound
    ));
}

#[tokio::test]
async fn referenced_parents_cannot_be_deleted() {
    let store = seeded_store().await;
    let created = AthleteService::new(&store).create(&joao()).await.unwrap();

    let err = CategoryService::new(&store)
        .delete(created.category.id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    let err = TrainingCenterService::new(&store)
        .delete(created.training_center.id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    AthleteService::new(&store).delete(created.id).await.unwrap();
    CategoryService::new(&store)
        .delete(created.category.id)
        .await
        .unwrap();
    TrainingCenterService::new(&store)
        .delete(created.training_center.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn store_unique_key_catches_duplicate_national_id() {
    let store = seeded_store().await;
    AthleteService::new(&store).create(&joao()).await.unwrap();

    // The national id lookup misses, so only the store's unique key stops the insert.
    let hiding = HidingStore::new(
        store.clone(),
        Hidden {
            national_ids: true,
            ..Default::default()
        },
    );
    let mut second = joao();
    second.name = "Maria Souza".into();
    let err = AthleteService::new(&hiding).create(&second).await.unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert!(!err.is_internal());
    assert_eq!(store.athlete_count().await, 1);
}

#[tokio::test]
async fn dangling_category_on_read_is_inconsistent() {
    let store = seeded_store().await;
    let created = AthleteService::new(&store).create(&joao()).await.unwrap();

    let hiding = HidingStore::new(
        store.clone(),
        Hidden {
            category_ids: true,
            ..Default::default()
        },
    );
    let service = AthleteService::new(&hiding);

    let err = service.list().await.unwrap_err();
    assert!(matches!(err, StorageError::Inconsistent(_)));
    assert!(err.is_internal());

    let err = service.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::Inconsistent(_)));
}

#[tokio::test]
async fn storage_failure_on_update_keeps_athlete_unchanged() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();
    store.fail_next_write();
    let err = service
        .update(
            created.id,
            &UpdateAthleteRequest {
                name: Some("Maria Souza".into()),
                weight: Some(80.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_internal());
    assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn storage_failure_on_delete_keeps_athlete() {
    let store = seeded_store().await;
    let service = AthleteService::new(&store);

    let created = service.create(&joao()).await.unwrap();
    store.fail_next_write();
    let err = service.delete(created.id).await.unwrap_err();

    assert!(err.is_internal());
    assert_eq!(store.athlete_count().await, 1);
    assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
}
