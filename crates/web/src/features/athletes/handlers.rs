use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
    services::AthleteService,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/atleta",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Category or training center not found"),
        (status = 409, description = "An athlete with this national id already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "atletas"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    Json(req): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let athlete = AthleteService::new(state.store()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    get,
    path = "/atleta",
    responses(
        (status = 200, description = "List all athletes", body = Vec<AthleteResponse>)
    ),
    tag = "atletas"
)]
pub async fn list_athletes(State(state): State<AppState>) -> WebResult<Response> {
    let athletes = AthleteService::new(state.store()).list().await?;

    Ok(Json(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let athlete = AthleteService::new(state.store()).get_by_id(id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    patch,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 404, description = "Athlete not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "atletas"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = AthleteService::new(state.store())
        .update(id, &update_req)
        .await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    AthleteService::new(state.store()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
