//! Repository for the `updates` table.

use chrono::Utc;
use kanbee_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::update::{CreateUpdate, Update, UpdateUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, message, filename, attachment_data, created_at";

/// Provides CRUD operations for task updates.
pub struct UpdateRepo;

impl UpdateRepo {
    /// Append an update to a task, stamped with the current time.
    ///
    /// Fails with a foreign-key violation if `task_id` does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateUpdate) -> Result<Update, sqlx::Error> {
        let query = format!(
            "INSERT INTO updates (task_id, message, filename, attachment_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Update>(&query)
            .bind(input.task_id)
            .bind(&input.message)
            .bind(&input.filename)
            .bind(&input.attachment_data)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an update by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Update>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM updates WHERE id = ?1");
        sqlx::query_as::<_, Update>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the updates of a task, oldest first.
    pub async fn list_by_task(
        pool: &SqlitePool,
        task_id: DbId,
    ) -> Result<Vec<Update>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM updates WHERE task_id = ?1 ORDER BY id ASC");
        sqlx::query_as::<_, Update>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite message, filename, attachment and task reference.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateUpdate,
    ) -> Result<Option<Update>, sqlx::Error> {
        let query = format!(
            "UPDATE updates SET
                task_id = ?2,
                message = ?3,
                filename = ?4,
                attachment_data = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Update>(&query)
            .bind(id)
            .bind(input.task_id)
            .bind(&input.message)
            .bind(&input.filename)
            .bind(&input.attachment_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete an update. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM updates WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
