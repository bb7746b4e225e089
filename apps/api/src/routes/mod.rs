pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Word Association Test
        .route("/api/v1/wat/words", get(handlers::handle_get_words))
        .route(
            "/api/v1/wat/analyze-response",
            post(handlers::handle_analyze_response),
        )
        .route("/api/v1/wat/analyze", post(handlers::handle_analyze_test))
        .route(
            "/api/v1/wat/results",
            post(handlers::handle_submit_result).get(handlers::handle_list_results),
        )
        .route("/api/v1/wat/results/:id", get(handlers::handle_get_result))
        .with_state(state)
}
