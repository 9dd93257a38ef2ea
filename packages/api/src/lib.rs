// ABOUTME: HTTP API layer for Taskhub providing REST endpoints and routing
// ABOUTME: Maps the task repository and summarization gateway onto the wire contract

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

pub mod health;
pub mod response;
pub mod state;
pub mod summarize_handlers;
pub mod tasks_handlers;

pub use state::AppState;

/// Creates the application router. Any unmatched method+path pair falls
/// through to a uniform 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness))
        .route("/tasks", get(tasks_handlers::list_tasks))
        .route("/tasks", post(tasks_handlers::create_task))
        .route("/tasks/{id}", put(tasks_handlers::update_task))
        .route("/tasks/{id}", delete(tasks_handlers::delete_task))
        .route("/summarize-task", post(summarize_handlers::summarize_task))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
