// ABOUTME: Shared application state for API handlers
// ABOUTME: Holds the task storage and the summarization gateway

use std::sync::Arc;

use sqlx::SqlitePool;

use taskhub_ai::Summarizer;
use taskhub_tasks::TaskStorage;

/// Shared state for API handlers, constructed once at startup and injected
/// through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub task_storage: Arc<TaskStorage>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, summarizer: Summarizer) -> Self {
        Self {
            task_storage: Arc::new(TaskStorage::new(pool)),
            summarizer: Arc::new(summarizer),
        }
    }
}
