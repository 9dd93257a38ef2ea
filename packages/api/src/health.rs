// ABOUTME: Liveness endpoint
// ABOUTME: Plain-text check that the server is up

pub async fn liveness() -> &'static str {
    "Task Manager API is running"
}
