// ABOUTME: Response mapping shared across API endpoints
// ABOUTME: Missing rows become 404, everything else a generic 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use taskhub_storage::StorageError;

/// Map a storage failure onto the wire contract: a missing row is a 404 and
/// any other failure is a generic 500 with the route's error message. The
/// original error detail is logged and never returned to the caller.
pub fn storage_failure(err: StorageError, message: &'static str) -> Response {
    match err {
        StorageError::NotFound => (StatusCode::NOT_FOUND, "Task not found").into_response(),
        err => {
            error!("{}: {}", message, err);
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}
