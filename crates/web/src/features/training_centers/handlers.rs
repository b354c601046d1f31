use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::training_center::{
        CreateTrainingCenterRequest, TrainingCenterResponse, UpdateTrainingCenterRequest,
    },
    services::TrainingCenterService,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/centro_treinamento",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 409, description = "A training center with this name already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_training_center(
    State(state): State<AppState>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let center = TrainingCenterService::new(state.store())
        .create(&req)
        .await?;

    Ok((StatusCode::CREATED, Json(TrainingCenterResponse::from(center))).into_response())
}

#[utoipa::path(
    get,
    path = "/centro_treinamento",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_training_centers(State(state): State<AppState>) -> WebResult<Response> {
    let centers = TrainingCenterService::new(state.store()).list().await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/centro_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_training_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let center = TrainingCenterService::new(state.store())
        .get_by_id(id)
        .await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}

#[utoipa::path(
    patch,
    path = "/centro_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    request_body = UpdateTrainingCenterRequest,
    responses(
        (status = 200, description = "Training center updated successfully", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Another training center already uses this name"),
        (status = 422, description = "Validation error")
    ),
    tag = "centros_treinamento"
)]
pub async fn update_training_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTrainingCenterRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let center = TrainingCenterService::new(state.store())
        .update(id, &req)
        .await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}

#[utoipa::path(
    delete,
    path = "/centro_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 204, description = "Training center deleted successfully"),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Training center is still referenced by athletes")
    ),
    tag = "centros_treinamento"
)]
pub async fn delete_training_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    TrainingCenterService::new(state.store()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
