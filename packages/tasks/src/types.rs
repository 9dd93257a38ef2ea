// ABOUTME: Task type definitions
// ABOUTME: Structures for task rows and create/update inputs

use serde::{Deserialize, Serialize};

/// A task row as served by the API. `owner` is the joined `users.name` for
/// the task's `user_id` and is never stored on the task itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub owner: Option<String>,
}

/// Creation never sets `status` or `user_id`; both start out NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

/// Full replace: every field overwrites its column, so an omitted field
/// clears the column to NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}
