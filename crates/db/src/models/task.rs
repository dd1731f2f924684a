//! Task entity model, lifecycle state and DTOs.

use kanbee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed task lifecycle, stored as upper-case text in `tasks.state`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    #[default]
    Todo,
    InProgress,
    Done,
    Blocked,
}

impl TaskState {
    /// The stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Todo => "TODO",
            TaskState::InProgress => "IN_PROGRESS",
            TaskState::Done => "DONE",
            TaskState::Blocked => "BLOCKED",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub state: TaskState,
    pub created_at: Timestamp,
    pub deadline: Option<Timestamp>,
}

/// DTO for creating a new task. `state` defaults to `TODO`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub project_id: DbId,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default)]
    pub deadline: Option<Timestamp>,
}

/// DTO for replacing a task's mutable fields. `created_at` is never touched,
/// and an absent `deadline` keeps the stored one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub project_id: DbId,
    pub state: TaskState,
    #[serde(default)]
    pub deadline: Option<Timestamp>,
}

/// DTO for a state-only transition.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateTaskState {
    pub state: TaskState,
}
