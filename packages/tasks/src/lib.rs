// ABOUTME: Task management storage and domain types
// ABOUTME: Provides CRUD operations over the tasks table

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
