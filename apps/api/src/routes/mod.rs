pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::distribution::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/distribution", post(handlers::handle_distribute))
        .route(
            "/api/v1/distribution/pages/:page",
            post(handlers::handle_get_page),
        )
        .route("/api/v1/distribution/score", post(handlers::handle_score))
        .route(
            "/api/v1/distribution/validate",
            post(handlers::handle_validate),
        )
        .with_state(state)
}
