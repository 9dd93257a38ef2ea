// ABOUTME: HTTP request handlers for task operations
// ABOUTME: CRUD endpoints backed by the task storage layer

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::response::storage_failure;
use crate::state::AppState;
use taskhub_tasks::{TaskCreateInput, TaskUpdateInput};

/// List all tasks with their joined owner names
pub async fn list_tasks(State(state): State<AppState>) -> Response {
    info!("Listing tasks");

    match state.task_storage.list_tasks().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(err) => storage_failure(err, "Error retrieving tasks"),
    }
}

/// Request body for creating a task. `title` is required by contract but its
/// absence is forwarded to the store unchanged.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Response {
    info!("Creating task '{}'", request.title.as_deref().unwrap_or(""));

    let input = TaskCreateInput {
        title: request.title,
        description: request.description,
        due_date: request.due_date,
    };

    match state.task_storage.create_task(input).await {
        Ok(task_id) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Task created successfully", "taskId": task_id })),
        )
            .into_response(),
        Err(err) => storage_failure(err, "Error creating task"),
    }
}

/// Request body for updating a task. The operation is a full replace: any
/// omitted field overwrites its column with NULL.
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// Update an existing task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Response {
    info!("Updating task: {}", id);

    let input = TaskUpdateInput {
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        status: request.status,
    };

    match state.task_storage.update_task(id, input).await {
        Ok(()) => (StatusCode::OK, "Task updated successfully").into_response(),
        Err(err) => storage_failure(err, "Error updating task"),
    }
}

/// Delete a task
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    info!("Deleting task: {}", id);

    match state.task_storage.delete_task(id).await {
        Ok(()) => (StatusCode::OK, "Task deleted successfully").into_response(),
        Err(err) => storage_failure(err, "Error deleting task"),
    }
}
