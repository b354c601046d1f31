use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
    services::CategoryService,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/categoria",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 409, description = "A category with this name already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "categorias"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let category = CategoryService::new(state.store()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/categoria",
    responses(
        (status = 200, description = "List all categories", body = Vec<CategoryResponse>)
    ),
    tag = "categorias"
)]
pub async fn list_categories(State(state): State<AppState>) -> WebResult<Response> {
    let categories = CategoryService::new(state.store()).list().await?;

    let response: Vec<CategoryResponse> = categories
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/categoria/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let category = CategoryService::new(state.store()).get_by_id(id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    patch,
    path = "/categoria/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Another category already uses this name"),
        (status = 422, description = "Validation error")
    ),
    tag = "categorias"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let category = CategoryService::new(state.store()).update(id, &req).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    delete,
    path = "/categoria/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category is still referenced by athletes")
    ),
    tag = "categorias"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    CategoryService::new(state.store()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
