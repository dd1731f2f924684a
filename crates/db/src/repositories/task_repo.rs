//! Repository for the `tasks` table.

use chrono::Utc;
use kanbee_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::task::{CreateTask, Task, TaskState, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, state, created_at, deadline";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task stamped with the current time.
    ///
    /// Fails with a foreign-key violation if `project_id` does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, description, state, created_at, deadline)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.state)
            .bind(Utc::now())
            .bind(input.deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the tasks of a project in insertion order.
    ///
    /// `state = None` applies no state filter; `Some(s)` keeps only tasks in `s`.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
        state: Option<TaskState>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = ?1 AND (?2 IS NULL OR state = ?2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(state)
            .fetch_all(pool)
            .await
    }

    /// Overwrite title, description, project reference and state.
    ///
    /// The deadline is replaced only when `input.deadline` is set.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = ?2,
                description = ?3,
                project_id = ?4,
                state = ?5,
                deadline = COALESCE(?6, deadline)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.project_id)
            .bind(input.state)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite only the state of a task.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_state(
        pool: &SqlitePool,
        id: DbId,
        state: TaskState,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("UPDATE tasks SET state = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(state)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task and its updates. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
