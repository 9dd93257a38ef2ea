// ABOUTME: Task storage layer using SQLite
// ABOUTME: One parameterized statement per operation, owner joined from users

use sqlx::SqlitePool;
use tracing::debug;

use crate::types::{Task, TaskCreateInput, TaskUpdateInput};
use taskhub_storage::StorageError;

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every task with its owner's display name. `owner` is NULL when
    /// the task has no user or the referenced user is gone. No explicit
    /// ordering; rows come back in store order.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT
                tasks.id,
                tasks.title,
                tasks.description,
                tasks.due_date,
                tasks.status,
                users.name AS owner
            FROM tasks
            LEFT JOIN users ON tasks.user_id = users.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(tasks)
    }

    /// Insert one task and return the id the store assigned.
    pub async fn create_task(&self, input: TaskCreateInput) -> Result<i64, StorageError> {
        let result =
            sqlx::query("INSERT INTO tasks (title, description, due_date) VALUES (?, ?, ?)")
                .bind(&input.title)
                .bind(&input.description)
                .bind(&input.due_date)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        let task_id = result.last_insert_rowid();
        debug!("Inserted task {}", task_id);

        Ok(task_id)
    }

    /// Overwrite all mutable columns of one task. At most one row affected;
    /// zero rows means the id does not exist.
    pub async fn update_task(&self, id: i64, input: TaskUpdateInput) -> Result<(), StorageError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, due_date = ?, status = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.due_date)
        .bind(&input.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Delete one task. Deleting an id that is already gone is NotFound.
    pub async fn delete_task(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
