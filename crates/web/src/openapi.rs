use utoipa::OpenApi;

use crate::features::{athletes, categories, health, training_centers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workout API",
        description = "Athletes, categories and training centers"
    ),
    paths(
        health::handlers::root,
        health::handlers::health_check,
        categories::handlers::create_category,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        training_centers::handlers::create_training_center,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        training_centers::handlers::update_training_center,
        training_centers::handlers::delete_training_center,
        athletes::handlers::create_athlete,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            health::handlers::HealthResponse,
            health::handlers::WelcomeResponse,
        )
    ),
    tags(
        (name = "categorias", description = "Athlete categories"),
        (name = "centros_treinamento", description = "Training centers"),
        (name = "atletas", description = "Athletes with embedded category and training center"),
        (name = "health", description = "Liveness and welcome endpoints"),
    )
)]
pub struct ApiDoc;
