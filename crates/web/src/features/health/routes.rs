use axum::{Router, routing::get};

use super::handlers::{health_check, root};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
