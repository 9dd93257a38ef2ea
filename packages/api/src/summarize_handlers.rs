// ABOUTME: HTTP request handler for the summarize endpoint
// ABOUTME: Forwards a task description to the summarization gateway

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::state::AppState;

/// A missing `taskDescription` is treated as the empty string; the downstream
/// call is issued either way.
#[derive(Deserialize)]
pub struct SummarizeTaskRequest {
    #[serde(rename = "taskDescription", default)]
    pub task_description: String,
}

/// Summarize a task description via the hosted completion model
pub async fn summarize_task(
    State(state): State<AppState>,
    Json(request): Json<SummarizeTaskRequest>,
) -> Response {
    info!("Summarizing task description");

    match state
        .summarizer
        .summarize_task(&request.task_description)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(json!({ "summary": summary }))).into_response(),
        Err(err) => {
            error!("Error with completion API: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize task.").into_response()
        }
    }
}
